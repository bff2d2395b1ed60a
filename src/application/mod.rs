//! Application Layer
//!
//! Use cases that orchestrate the compiler.
//! This layer:
//! - Depends on Domain layer (services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CompileUseCase` - One-shot compiles (project, stdin, raw arguments)
//! - `WatchSupervisor` - Long-running `--watch` process with restart on exit

pub mod compile;
pub mod watch;

pub use compile::{CompileOptions, CompileReport, CompileUseCase};
pub use watch::{WatchState, WatchSupervisor};

use crate::config::CompilerOptions;
use crate::domain::ports::SassCommand;

/// Fill in the snapshot from the located command unless one is configured
pub(crate) fn with_command_snapshot(
    mut options: CompilerOptions,
    command: &SassCommand,
) -> CompilerOptions {
    if options.snapshot.is_none() {
        options.snapshot = command
            .snapshot
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned());
    }
    options
}
