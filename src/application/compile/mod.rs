//! Compile Module
//!
//! One-shot compiler runs.
//!
//! ## Structure
//!
//! - `options` - Per-run settings (`CompileOptions`)
//! - `result` - Result types (`CompileReport`)
//! - `use_case` - Core use case logic (`CompileUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! let use_case = CompileUseCase::new(options, command);
//! let report = use_case.compile_project(&CompileOptions::new(root))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::CompileOptions;
pub use result::CompileReport;
pub use use_case::CompileUseCase;
