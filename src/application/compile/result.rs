//! Compile Result
//!
//! Result types for one-shot project compiles.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::services::CompiledFile;
use crate::domain::value_objects::ResolvedTarget;

/// What a project compile produced
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompileReport {
    /// Files the compiler reported writing, in report order
    pub generated: Vec<PathBuf>,
    /// Source and destination of each generated file
    pub compiled: Vec<CompiledFile>,
    /// Non-empty stderr lines from a successful run (deprecations and the like)
    pub warnings: Vec<String>,
    /// Targets left out because their (optional) source does not exist
    pub skipped: Vec<ResolvedTarget>,
}

impl CompileReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Nothing was written, either because nothing changed or nothing exists
    pub fn is_empty(&self) -> bool {
        self.generated.is_empty()
    }
}
