//! Configuration loading
//!
//! Reads `sasscompiler.json` (or the `SassCompiler` section of
//! `appsettings.json`), applies per-build-configuration and per-environment
//! overrides, then `SASSKIT_*` environment variables. The result is a plain
//! [`CompilerOptions`] value; nothing is cached between calls.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ConfigWarning;
use crate::error::{SassError, SassResult};

use super::types::{CompilerOptions, ConfigLayer};

/// Dedicated configuration file, keys on the root object
pub const CONFIG_FILE_NAME: &str = "sasscompiler.json";

/// Shared host settings file, keys under [`APPSETTINGS_SECTION`]
pub const APPSETTINGS_FILE_NAME: &str = "appsettings.json";

pub const APPSETTINGS_SECTION: &str = "SassCompiler";

/// Selects the `sasscompiler.<env>.json` overlay
pub const ENVIRONMENT_VAR: &str = "SASSKIT_ENVIRONMENT";

/// Result of loading configuration
#[derive(Debug, Clone)]
pub struct LoadedOptions {
    pub options: CompilerOptions,
    /// Non-fatal problems (unknown keys, empty files, unreadable appsettings)
    pub warnings: Vec<ConfigWarning>,
    /// Files that contributed, in application order
    pub files: Vec<PathBuf>,
}

/// Builder for a configuration load
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    project_root: PathBuf,
    configuration: Option<String>,
    environment: Option<String>,
    env_overrides: bool,
}

impl ConfigLoader {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            configuration: None,
            environment: None,
            env_overrides: false,
        }
    }

    /// Build configuration name used to pick a `Configurations` entry
    pub fn with_configuration(mut self, configuration: Option<&str>) -> Self {
        self.configuration = configuration.map(str::to_string);
        self
    }

    /// Environment name used to pick a `sasscompiler.<env>.json` overlay
    pub fn with_environment(mut self, environment: Option<&str>) -> Self {
        self.environment = environment
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(str::to_string);
        self
    }

    /// Apply `SASSKIT_*` environment variable overrides last
    pub fn with_env_overrides(mut self, enabled: bool) -> Self {
        self.env_overrides = enabled;
        self
    }

    pub fn load(&self) -> SassResult<LoadedOptions> {
        let mut options = CompilerOptions::default();
        let mut warnings = Vec::new();
        let mut files = Vec::new();

        let base = self.read_base_layer(&mut warnings, &mut files)?;
        if let Some(layer) = &base {
            layer.apply_to(&mut options);
            if let Some(name) = &self.configuration {
                if let Some(overrides) = layer.configuration(name) {
                    tracing::debug!(configuration = %name, "applying configuration overrides");
                    overrides.apply_to(&mut options);
                }
            }
        }

        if let Some(environment) = &self.environment {
            let path = self
                .project_root
                .join(format!("sasscompiler.{}.json", environment));
            if path.is_file() {
                if let Some(layer) = read_config_file(&path, &mut warnings)? {
                    layer.apply_to(&mut options);
                    files.push(path);
                }
            }
        }

        if self.env_overrides {
            options = with_env_overrides(options);
        }

        Ok(LoadedOptions {
            options,
            warnings,
            files,
        })
    }

    fn read_base_layer(
        &self,
        warnings: &mut Vec<ConfigWarning>,
        files: &mut Vec<PathBuf>,
    ) -> SassResult<Option<ConfigLayer>> {
        let config_path = self.project_root.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            let layer = read_config_file(&config_path, warnings)?;
            if layer.is_some() {
                files.push(config_path);
            }
            return Ok(layer);
        }

        let appsettings_path = self.project_root.join(APPSETTINGS_FILE_NAME);
        if appsettings_path.is_file() {
            let layer = read_appsettings_section(&appsettings_path, warnings);
            if layer.is_some() {
                files.push(appsettings_path);
            }
            return Ok(layer);
        }

        Ok(None)
    }
}

/// Load options for a project with environment overlays and overrides applied
pub fn load_options(project_root: &Path, configuration: Option<&str>) -> SassResult<LoadedOptions> {
    let environment = std::env::var(ENVIRONMENT_VAR).ok();
    ConfigLoader::new(project_root)
        .with_configuration(configuration)
        .with_environment(environment.as_deref())
        .with_env_overrides(true)
        .load()
}

/// Apply environment variable overrides (SASSKIT_* prefix)
pub fn with_env_overrides(mut options: CompilerOptions) -> CompilerOptions {
    if let Ok(source) = std::env::var("SASSKIT_SOURCE_FOLDER") {
        if !source.trim().is_empty() {
            options = options.with_source_folder(source);
        }
    }

    if let Ok(target) = std::env::var("SASSKIT_TARGET_FOLDER") {
        if !target.trim().is_empty() {
            options = options.with_target_folder(target);
        }
    }

    if let Ok(arguments) = std::env::var("SASSKIT_ARGUMENTS") {
        options.free_arguments = arguments;
    }

    if let Ok(val) = std::env::var("SASSKIT_GENERATE_SCOPED_CSS") {
        options.generate_scoped_outputs = val.to_lowercase() != "false" && val != "0";
    }

    options
}

/// Read a dedicated config file. `Ok(None)` means "present but empty".
fn read_config_file(
    path: &Path,
    warnings: &mut Vec<ConfigWarning>,
) -> SassResult<Option<ConfigLayer>> {
    let content = fs::read_to_string(path).map_err(|e| SassError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if content.trim().is_empty() {
        warnings.push(ConfigWarning::EmptyFile {
            file: path.to_path_buf(),
        });
        return Ok(None);
    }

    let mut deserializer = serde_json::Deserializer::from_str(&content);
    let layer = deserialize_layer(&mut deserializer, path, &content, warnings).map_err(|e| {
        SassError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;

    if matches!(layer.nested_section, Some(serde_json::Value::Object(_))) {
        return Err(SassError::NestedConfigSection {
            file: path.to_path_buf(),
        });
    }

    Ok(Some(layer))
}

/// Read the `SassCompiler` section of appsettings. Problems are warnings.
fn read_appsettings_section(path: &Path, warnings: &mut Vec<ConfigWarning>) -> Option<ConfigLayer> {
    let ignored = |reason: String| ConfigWarning::Ignored {
        file: path.to_path_buf(),
        reason,
    };

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warnings.push(ignored(e.to_string()));
            return None;
        }
    };
    if content.trim().is_empty() {
        return None;
    }

    let mut root: serde_json::Value = match serde_json::from_str(&content) {
        Ok(root) => root,
        Err(e) => {
            warnings.push(ignored(e.to_string()));
            return None;
        }
    };

    let section = root.get_mut(APPSETTINGS_SECTION)?.take();
    if !section.is_object() {
        return None;
    }

    match deserialize_layer(section, path, &content, warnings) {
        Ok(layer) => Some(layer),
        Err(e) => {
            warnings.push(ignored(e.to_string()));
            None
        }
    }
}

fn deserialize_layer<'de, D>(
    deserializer: D,
    path: &Path,
    content: &str,
    warnings: &mut Vec<ConfigWarning>,
) -> Result<ConfigLayer, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let mut unknown_paths: Vec<String> = Vec::new();
    let layer: ConfigLayer = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })?;

    warnings.extend(unknown_paths.into_iter().map(|path_str| {
        let key = path_str
            .split('.')
            .next_back()
            .unwrap_or(path_str.as_str())
            .to_string();
        ConfigWarning::UnknownKey {
            key: key.clone(),
            file: path.to_path_buf(),
            line: find_line_number(content, &key),
            suggestion: suggest_key(&key),
        }
    }));

    Ok(layer)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    let quoted = format!("\"{}\"", needle);
    for (i, line) in content.lines().enumerate() {
        if line.contains(&quoted) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const COMPILATION_KEYS: [&str; 3] = ["Source", "Target", "Optional"];

    let unknown_lower = unknown.to_lowercase();
    let mut best: Option<(&str, usize)> = None;
    for candidate in ConfigLayer::KEYS.iter().chain(COMPILATION_KEYS.iter()) {
        let dist = levenshtein(&unknown_lower, &candidate.to_lowercase());
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
