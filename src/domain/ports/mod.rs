//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod binary_locator;
pub mod file_system;
pub mod log_sink;
pub mod process_registrar;

pub use binary_locator::{BinaryLocator, FixedLocator, SassCommand};
pub use file_system::FileSystem;
pub use log_sink::{LogLevel, LogSink, NoopLogSink};
pub use process_registrar::{NoopRegistrar, ProcessRegistrar};
