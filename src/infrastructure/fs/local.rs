//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::path::Path;

use crate::domain::ports::FileSystem;

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
