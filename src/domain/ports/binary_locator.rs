//! Binary Locator Port
//!
//! Finds the compiler executable for the current platform. Where it looks is
//! a packaging concern; the core only needs a usable path or `BinaryNotFound`.

use std::path::PathBuf;

use crate::error::SassResult;

/// The compiler program plus the optional interpreter snapshot passed as its
/// first argument (the bundled Dart VM runs `dart sass.snapshot <args>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SassCommand {
    pub program: PathBuf,
    pub snapshot: Option<PathBuf>,
}

impl SassCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            snapshot: None,
        }
    }

    pub fn with_snapshot(mut self, snapshot: impl Into<PathBuf>) -> Self {
        self.snapshot = Some(snapshot.into());
        self
    }
}

pub trait BinaryLocator {
    fn locate(&self) -> SassResult<SassCommand>;
}

/// Locator that always answers with the same command
#[derive(Debug, Clone)]
pub struct FixedLocator(pub SassCommand);

impl BinaryLocator for FixedLocator {
    fn locate(&self) -> SassResult<SassCommand> {
        Ok(self.0.clone())
    }
}
