//! Build mode value object - picks style and source-map defaults

use serde::{Deserialize, Serialize};

/// Whether the compile is a development ("debug-like") build or not.
///
/// Only used to fill in flags the user left unset; an explicit
/// `--style` or `--[no-]source-map` in the arguments always wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Debug,
    #[default]
    Release,
}

impl BuildMode {
    pub const DEBUG_STYLE: &'static str = "expanded";
    pub const RELEASE_STYLE: &'static str = "compressed";
    pub const DEBUG_SOURCE_MAP: bool = true;
    pub const RELEASE_SOURCE_MAP: bool = false;

    /// Map a build configuration name (`Debug`, `Release`, ...) to a mode.
    ///
    /// Only `Debug` (any case) is debug-like.
    pub fn from_configuration(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("debug") {
            BuildMode::Debug
        } else {
            BuildMode::Release
        }
    }

    pub fn default_style(&self) -> &'static str {
        match self {
            BuildMode::Debug => Self::DEBUG_STYLE,
            BuildMode::Release => Self::RELEASE_STYLE,
        }
    }

    pub fn default_source_map(&self) -> bool {
        match self {
            BuildMode::Debug => Self::DEBUG_SOURCE_MAP,
            BuildMode::Release => Self::RELEASE_SOURCE_MAP,
        }
    }

    /// The `--style=...` token injected when none was given
    pub fn style_flag(&self) -> String {
        format!("--style={}", self.default_style())
    }

    /// The `--source-map` / `--no-source-map` token injected when neither was given
    pub fn source_map_flag(&self) -> &'static str {
        if self.default_source_map() {
            "--source-map"
        } else {
            "--no-source-map"
        }
    }
}

impl std::fmt::Display for BuildMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildMode::Debug => write!(f, "Debug"),
            BuildMode::Release => write!(f, "Release"),
        }
    }
}
