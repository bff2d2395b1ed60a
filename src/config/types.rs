//! Configuration type definitions

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::value_objects::{normalize_separators, CompilationTarget};

/// Folder compiled by default when nothing else is configured
pub const DEFAULT_SOURCE_FOLDER: &str = "Styles";

/// Folder the default compilation writes to
pub const DEFAULT_TARGET_FOLDER: &str = "wwwroot/css";

/// Free arguments used when the configuration sets none
pub const DEFAULT_ARGUMENTS: &str = "--error-css";

/// Folders compiled in place for co-located component styles
pub const DEFAULT_SCOPED_FOLDERS: [&str; 4] = ["Views", "Pages", "Shared", "Components"];

/// Fully resolved compiler configuration.
///
/// An immutable value handed to the resolver and argument builder. Built
/// either by [`load_options`](super::load_options) or programmatically with
/// the `with_*` methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerOptions {
    /// The primary source → target pair
    pub default_compilation: CompilationTarget,
    /// Additional pairs, compiled after the default one
    pub explicit_compilations: Vec<CompilationTarget>,
    /// Whether `scoped_folder_names` are compiled in place
    pub generate_scoped_outputs: bool,
    pub scoped_folder_names: Vec<String>,
    /// Raw flags forwarded to the compiler after validation
    pub free_arguments: String,
    /// Extra `--load-path` entries, in order
    pub include_paths: Vec<String>,
    /// Interpreter snapshot passed verbatim as the first argument
    pub snapshot: Option<String>,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            default_compilation: CompilationTarget::new(
                DEFAULT_SOURCE_FOLDER,
                DEFAULT_TARGET_FOLDER,
            ),
            explicit_compilations: Vec::new(),
            generate_scoped_outputs: true,
            scoped_folder_names: DEFAULT_SCOPED_FOLDERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            free_arguments: DEFAULT_ARGUMENTS.to_string(),
            include_paths: Vec::new(),
            snapshot: None,
        }
    }
}

impl CompilerOptions {
    /// Options with no compilation work and no arguments.
    ///
    /// Used for raw invocations (stdin compiles, explicit argument lists)
    /// where the caller supplies everything.
    pub fn empty() -> Self {
        Self {
            default_compilation: CompilationTarget::new("", ""),
            explicit_compilations: Vec::new(),
            generate_scoped_outputs: false,
            scoped_folder_names: Vec::new(),
            free_arguments: String::new(),
            include_paths: Vec::new(),
            snapshot: None,
        }
    }

    /// Define or overwrite the folder that contains the style sources
    pub fn with_source_folder(mut self, source: impl AsRef<str>) -> Self {
        let target = self.default_compilation.target().to_string();
        self.default_compilation = rebuild(&self.default_compilation, source.as_ref(), &target);
        self
    }

    /// Define or overwrite the folder compiled CSS is written to
    pub fn with_target_folder(mut self, target: impl AsRef<str>) -> Self {
        let source = self.default_compilation.source().to_string();
        self.default_compilation = rebuild(&self.default_compilation, &source, target.as_ref());
        self
    }

    pub fn with_default_compilation(mut self, target: CompilationTarget) -> Self {
        self.default_compilation = target;
        self
    }

    pub fn with_compilation(mut self, target: CompilationTarget) -> Self {
        self.explicit_compilations.push(target);
        self
    }

    pub fn with_arguments(mut self, arguments: impl Into<String>) -> Self {
        self.free_arguments = arguments.into();
        self
    }

    pub fn with_scoped_outputs(mut self, enabled: bool) -> Self {
        self.generate_scoped_outputs = enabled;
        self
    }

    pub fn with_scoped_folders<I, S>(mut self, folders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scoped_folder_names = folders.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_include_path(mut self, path: impl AsRef<str>) -> Self {
        self.include_paths.push(normalize_separators(path.as_ref()));
        self
    }

    pub fn with_snapshot(mut self, snapshot: impl Into<String>) -> Self {
        self.snapshot = Some(snapshot.into());
        self
    }

    /// True when the default pair is still the built-in `Styles` → `wwwroot/css`
    pub fn uses_default_pair(&self) -> bool {
        self.default_compilation.source() == DEFAULT_SOURCE_FOLDER
            && self.default_compilation.target() == DEFAULT_TARGET_FOLDER
    }

    /// True when there is compilation work besides the default pair
    pub fn has_additional_work(&self) -> bool {
        self.generate_scoped_outputs
            || self
                .explicit_compilations
                .iter()
                .any(CompilationTarget::is_complete)
    }

    /// `free_arguments` split into argv tokens
    pub fn argument_tokens(&self) -> Vec<String> {
        self.free_arguments
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

fn rebuild(previous: &CompilationTarget, source: &str, target: &str) -> CompilationTarget {
    let next = CompilationTarget::new(source, target);
    match previous.optional() {
        Some(optional) => next.with_optional(optional),
        None => next,
    }
}

/// One layer of configuration as it appears on disk.
///
/// Every field is optional; set fields override the options they are
/// applied to, unset ones leave them alone.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigLayer {
    pub source_folder: Option<String>,
    pub target_folder: Option<String>,
    pub arguments: Option<String>,
    pub generate_scoped_css: Option<bool>,
    pub scoped_css_folders: Option<Vec<String>>,
    pub include_paths: Option<Vec<String>>,
    pub compilations: Option<Vec<CompilationTarget>>,
    /// Per build configuration overrides, keyed by configuration name
    pub configurations: Option<BTreeMap<String, ConfigLayer>>,
    /// Only present when someone copied the appsettings section verbatim
    #[serde(rename = "SassCompiler")]
    pub nested_section: Option<serde_json::Value>,
}

impl ConfigLayer {
    /// Keys accepted at the top level of a layer
    pub const KEYS: [&'static str; 8] = [
        "SourceFolder",
        "TargetFolder",
        "Arguments",
        "GenerateScopedCss",
        "ScopedCssFolders",
        "IncludePaths",
        "Compilations",
        "Configurations",
    ];

    /// Overlay this layer onto `options`
    pub fn apply_to(&self, options: &mut CompilerOptions) {
        if let Some(source) = non_blank(&self.source_folder) {
            let target = options.default_compilation.target().to_string();
            options.default_compilation = rebuild(&options.default_compilation, source, &target);
        }
        if let Some(target) = non_blank(&self.target_folder) {
            let source = options.default_compilation.source().to_string();
            options.default_compilation = rebuild(&options.default_compilation, &source, target);
        }
        if let Some(arguments) = non_blank(&self.arguments) {
            options.free_arguments = arguments.to_string();
        }
        if let Some(generate) = self.generate_scoped_css {
            options.generate_scoped_outputs = generate;
        }
        if let Some(folders) = &self.scoped_css_folders {
            options.scoped_folder_names = folders
                .iter()
                .filter(|f| !f.trim().is_empty())
                .map(|f| normalize_separators(f))
                .collect();
        }
        if let Some(paths) = &self.include_paths {
            options.include_paths = paths.iter().map(|p| normalize_separators(p)).collect();
        }
        if let Some(compilations) = &self.compilations {
            options.explicit_compilations = compilations.clone();
        }
    }

    /// The override layer for a build configuration, if one is defined
    pub fn configuration(&self, name: &str) -> Option<&ConfigLayer> {
        self.configurations.as_ref()?.get(name)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}
