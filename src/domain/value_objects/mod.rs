//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod build_mode;
mod config_warning;
mod path;
mod target;

pub use build_mode::BuildMode;
pub use config_warning::ConfigWarning;
pub use path::{normalize_separators, quote_for_display};
pub use target::{CompilationTarget, ResolvedTarget};
