//! Platform Binary Locator
//!
//! Finds the compiler for the current OS and architecture. Lookup order:
//!
//! 1. Explicit path (`--binary` or `SASSKIT_BINARY`, plus `SASSKIT_SNAPSHOT`)
//! 2. Bundled Dart runtime under `runtimes/<rid>/src/`, searched in every
//!    ancestor of the running executable's directory
//! 3. A `sass` executable on `PATH`

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::ports::{BinaryLocator, SassCommand};
use crate::error::{SassError, SassResult};

pub const BINARY_ENV: &str = "SASSKIT_BINARY";
pub const SNAPSHOT_ENV: &str = "SASSKIT_SNAPSHOT";

/// Relative paths of the bundled `dart` runtime and `sass.snapshot` for
/// this platform, or `None` when nothing is bundled for it.
pub fn bundled_relative_paths() -> Option<(&'static str, &'static str)> {
    let arch = std::env::consts::ARCH;
    if cfg!(windows) {
        // Arm64 Windows runs the x64 build under emulation
        match arch {
            "x86_64" | "aarch64" => Some((
                r"runtimes\win-x64\src\dart.exe",
                r"runtimes\win-x64\src\sass.snapshot",
            )),
            _ => None,
        }
    } else if cfg!(target_os = "linux") {
        match arch {
            "x86_64" => Some((
                "runtimes/linux-x64/src/dart",
                "runtimes/linux-x64/src/sass.snapshot",
            )),
            "aarch64" => Some((
                "runtimes/linux-arm64/src/dart",
                "runtimes/linux-arm64/src/sass.snapshot",
            )),
            _ => None,
        }
    } else if cfg!(target_os = "macos") {
        match arch {
            "x86_64" => Some((
                "runtimes/osx-x64/src/dart",
                "runtimes/osx-x64/src/sass.snapshot",
            )),
            "aarch64" => Some((
                "runtimes/osx-arm64/src/dart",
                "runtimes/osx-arm64/src/sass.snapshot",
            )),
            _ => None,
        }
    } else {
        None
    }
}

fn path_executable_names() -> &'static [&'static str] {
    if cfg!(windows) {
        &["sass.bat", "sass.exe", "sass.cmd"]
    } else {
        &["sass"]
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlatformBinaryLocator {
    explicit: Option<PathBuf>,
    explicit_snapshot: Option<PathBuf>,
    search_from: Option<PathBuf>,
    path_var: Option<OsString>,
}

impl PlatformBinaryLocator {
    /// Locator configured from the process environment
    pub fn from_env() -> Self {
        Self {
            explicit: non_empty_var(BINARY_ENV).map(PathBuf::from),
            explicit_snapshot: non_empty_var(SNAPSHOT_ENV).map(PathBuf::from),
            search_from: std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf)),
            path_var: std::env::var_os("PATH"),
        }
    }

    /// Use this binary, ignoring every other source
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.explicit = Some(binary.into());
        self
    }

    pub fn with_snapshot(mut self, snapshot: impl Into<PathBuf>) -> Self {
        self.explicit_snapshot = Some(snapshot.into());
        self
    }

    /// Start the bundled-runtime search from this directory
    pub fn search_from(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_from = Some(dir.into());
        self
    }

    /// Directories to search for a `sass` executable, in `PATH` syntax
    pub fn with_path_var(mut self, path_var: Option<OsString>) -> Self {
        self.path_var = path_var;
        self
    }

    fn explicit_command(&self, binary: &Path) -> SassResult<SassCommand> {
        if !binary.is_file() {
            return Err(SassError::BinaryNotFound {
                searched: Some(binary.to_path_buf()),
            });
        }
        let command = SassCommand::new(binary);
        Ok(match &self.explicit_snapshot {
            Some(snapshot) => command.with_snapshot(snapshot),
            None => command,
        })
    }

    fn bundled_command(&self) -> Option<SassCommand> {
        let (exe, snapshot) = bundled_relative_paths()?;
        let start = self.search_from.as_deref()?;

        start.ancestors().find_map(|dir| {
            let program = dir.join(exe);
            if !program.is_file() {
                return None;
            }
            let snapshot = dir.join(snapshot);
            let command = SassCommand::new(program);
            Some(if snapshot.is_file() {
                command.with_snapshot(snapshot)
            } else {
                command
            })
        })
    }

    fn path_command(&self) -> Option<SassCommand> {
        let path_var = self.path_var.as_ref()?;
        std::env::split_paths(path_var).find_map(|dir| {
            path_executable_names()
                .iter()
                .map(|name| dir.join(name))
                .find(|candidate| candidate.is_file())
                .map(SassCommand::new)
        })
    }
}

impl BinaryLocator for PlatformBinaryLocator {
    fn locate(&self) -> SassResult<SassCommand> {
        if let Some(binary) = &self.explicit {
            return self.explicit_command(binary);
        }

        if let Some(command) = self.bundled_command() {
            tracing::debug!(program = %command.program.display(), "using bundled sass runtime");
            return Ok(command);
        }

        if let Some(command) = self.path_command() {
            tracing::debug!(program = %command.program.display(), "using sass from PATH");
            return Ok(command);
        }

        Err(SassError::BinaryNotFound { searched: None })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
