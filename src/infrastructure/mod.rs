//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementation (Local)
//! - `process/` - Compiler process invocation and tracking
//! - `locator/` - Platform binary lookup
//! - `logging/` - Log sinks

pub mod fs;
pub mod locator;
pub mod logging;
pub mod process;

// Re-export for convenience
pub use fs::LocalFs;
pub use locator::PlatformBinaryLocator;
pub use logging::TracingLogSink;
pub use process::{ProcessInvoker, ProcessOutcome, ProcessTracker};
