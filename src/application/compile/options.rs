//! Compile Options
//!
//! Settings for a single project compile.

use std::path::PathBuf;

use crate::domain::value_objects::BuildMode;

/// Options for [`CompileUseCase::compile_project`](super::CompileUseCase::compile_project)
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Directory the compiler runs in; relative sources resolve against it
    pub project_root: PathBuf,
    /// Style and source-map defaults; `None` leaves them to the compiler
    pub build_mode: Option<BuildMode>,
    /// Flags appended after the configured free arguments
    pub extra_flags: Vec<String>,
}

impl CompileOptions {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            build_mode: Some(BuildMode::Release),
            extra_flags: Vec::new(),
        }
    }

    pub fn with_build_mode(mut self, mode: Option<BuildMode>) -> Self {
        self.build_mode = mode;
        self
    }

    pub fn with_extra_flags(mut self, flags: Vec<String>) -> Self {
        self.extra_flags = flags;
        self
    }
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self::new(".")
    }
}
