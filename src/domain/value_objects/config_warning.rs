//! Configuration warning value object.

use std::path::PathBuf;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A key the configuration schema does not know
    UnknownKey {
        key: String,
        file: PathBuf,
        /// The line number (1-indexed) if available
        line: Option<usize>,
        /// A suggested correction if available
        suggestion: Option<String>,
    },
    /// The file exists but has no content
    EmptyFile { file: PathBuf },
    /// The file could not be read or parsed and was skipped
    Ignored { file: PathBuf, reason: String },
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigWarning::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                write!(f, "unknown key '{}' in {}", key, file.display())?;
                if let Some(line) = line {
                    write!(f, ":{}", line)?;
                }
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean '{}'?)", suggestion)?;
                }
                Ok(())
            }
            ConfigWarning::EmptyFile { file } => {
                write!(f, "{} exists but is empty, ignoring it", file.display())
            }
            ConfigWarning::Ignored { file, reason } => {
                write!(f, "unable to read {} ({}), ignoring it", file.display(), reason)
            }
        }
    }
}
