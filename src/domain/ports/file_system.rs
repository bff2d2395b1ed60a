//! FileSystem port - abstraction over the existence checks the core needs
//!
//! Target resolution and argument building never read or write files; they
//! only ask whether a source path is there. Keeping that behind a trait lets
//! the domain layer be tested without touching the disk.

use std::path::Path;

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O, optionally rooted at a project directory
/// - `MockFs` - in-memory set of paths for testing
pub trait FileSystem {
    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}
