//! Watch Supervision
//!
//! Keeps one compiler process running in `--watch` mode. The compiler does
//! its own file watching; this module only keeps it alive:
//! - `WatchSupervisor` - owns the process, restarts it after unexpected exits
//! - `WatchState` - `Stopped`, `Running` or `Restarting`
//!
//! ## Usage
//!
//! ```ignore
//! let mut supervisor = WatchSupervisor::new(options, command).with_project_root(root);
//! supervisor.start()?;
//! // ... until Ctrl+C
//! supervisor.stop();
//! ```

mod state;
mod supervisor;


pub use state::{describe_delay, WatchState, POLL_INTERVAL, RESTART_DELAY, STOP_GRACE};
pub use supervisor::WatchSupervisor;
