//! Error types for sasskit
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sasskit operations
pub type SassResult<T> = Result<T, SassError>;

/// Main error type for sasskit operations
#[derive(Error, Debug)]
pub enum SassError {
    /// The compiler executable could not be located for this platform
    #[error("sass executable not found{}", .searched.as_ref().map(|p| format!(" (looked for {})", p.display())).unwrap_or_default())]
    BinaryNotFound { searched: Option<PathBuf> },

    /// A flag that cannot be used for this kind of invocation
    #[error("The sass {flag} option is not supported.")]
    UnsupportedArgument { flag: String },

    /// A non-optional compilation source does not exist
    #[error("Sass source folder {path} does not exist.")]
    MissingRequiredSource { path: String },

    /// The compiler ran and returned a nonzero exit code
    #[error("Sass process exited with non-zero exit code: {exit_code}.")]
    CompileFailed { exit_code: i32, stderr: String },

    /// Spawning, reading or writing the compiler process failed
    #[error("sass process I/O failed: {0}")]
    ProcessIo(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// `sasscompiler.json` wraps its keys in a `SassCompiler` object
    #[error("detected 'SassCompiler' key in {file}; configuration keys must be directly on the root object")]
    NestedConfigSection { file: PathBuf },
}

impl SassError {
    /// Captured compiler diagnostics, when the process actually ran.
    pub fn error_output(&self) -> Option<&str> {
        match self {
            SassError::CompileFailed { stderr, .. } => Some(stderr),
            _ => None,
        }
    }

    /// Exit code of the compiler process, when it ran to completion.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            SassError::CompileFailed { exit_code, .. } => Some(*exit_code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unsupported_argument() {
        let err = SassError::UnsupportedArgument {
            flag: "--watch".to_string(),
        };
        assert_eq!(err.to_string(), "The sass --watch option is not supported.");
        assert!(err.error_output().is_none());
    }

    #[test]
    fn test_error_display_compile_failed_keeps_stderr() {
        let stderr = "Error: expected \"}\".\n  ╷\n1 │ body { color: black;\n".to_string();
        let err = SassError::CompileFailed {
            exit_code: 65,
            stderr: stderr.clone(),
        };
        assert_eq!(
            err.to_string(),
            "Sass process exited with non-zero exit code: 65."
        );
        assert_eq!(err.error_output(), Some(stderr.as_str()));
        assert_eq!(err.exit_code(), Some(65));
    }

    #[test]
    fn test_error_display_binary_not_found() {
        let err = SassError::BinaryNotFound { searched: None };
        assert_eq!(err.to_string(), "sass executable not found");

        let err = SassError::BinaryNotFound {
            searched: Some(PathBuf::from("runtimes/linux-x64/src/dart")),
        };
        assert_eq!(
            err.to_string(),
            "sass executable not found (looked for runtimes/linux-x64/src/dart)"
        );
    }

    #[test]
    fn test_error_display_missing_source() {
        let err = SassError::MissingRequiredSource {
            path: "Styles".to_string(),
        };
        assert_eq!(err.to_string(), "Sass source folder Styles does not exist.");
    }
}
