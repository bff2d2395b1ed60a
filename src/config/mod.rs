//! Configuration module for sasskit
//!
//! Configuration hierarchy (later wins):
//! 1. Built-in defaults
//! 2. `sasscompiler.json`, or the `SassCompiler` section of `appsettings.json`
//! 3. `Configurations.<name>` overrides for the active build configuration
//! 4. `sasscompiler.<env>.json` for the active environment
//! 5. Environment variables (SASSKIT_*)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{
    load_options, with_env_overrides, ConfigLoader, LoadedOptions, APPSETTINGS_FILE_NAME,
    APPSETTINGS_SECTION, CONFIG_FILE_NAME, ENVIRONMENT_VAR,
};
pub use types::{
    CompilerOptions, ConfigLayer, DEFAULT_ARGUMENTS, DEFAULT_SCOPED_FOLDERS,
    DEFAULT_SOURCE_FOLDER, DEFAULT_TARGET_FOLDER,
};
