//! sasskit - drives an external Sass compiler
//!
//! Resolves which sources compile to which outputs, builds validated
//! compiler arguments, and runs the compiler either once (build time) or as
//! a supervised `--watch` process that is restarted whenever it dies.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{CompileOptions, CompileReport, CompileUseCase, WatchState, WatchSupervisor};
pub use config::{load_options, CompilerOptions, ConfigLoader, LoadedOptions};
pub use domain::ports::{BinaryLocator, LogLevel, LogSink, ProcessRegistrar, SassCommand};
pub use domain::services::{ArgumentBuilder, Invocation, OutputParser, TargetResolver};
pub use domain::value_objects::{BuildMode, CompilationTarget, ResolvedTarget};
pub use error::{SassError, SassResult};
pub use infrastructure::{PlatformBinaryLocator, ProcessInvoker, ProcessTracker};
