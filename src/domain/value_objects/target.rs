//! Compilation target value object - one source → destination mapping

use serde::{Deserialize, Serialize};

use super::path::normalize_separators;

/// A source → destination mapping handed to the compiler as `source:target`.
///
/// `optional` is tri-state: `None` means "decide from context" (see
/// [`TargetResolver`](crate::domain::services::TargetResolver)).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompilationTarget {
    #[serde(default, deserialize_with = "deserialize_path")]
    source: String,
    #[serde(default, deserialize_with = "deserialize_path")]
    target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    optional: Option<bool>,
}

fn deserialize_path<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map(|s| normalize_separators(&s)).unwrap_or_default())
}

impl CompilationTarget {
    /// Create a target with an unset `optional` flag
    pub fn new(source: impl AsRef<str>, target: impl AsRef<str>) -> Self {
        Self {
            source: normalize_separators(source.as_ref()),
            target: normalize_separators(target.as_ref()),
            optional: None,
        }
    }

    /// Set the `optional` flag explicitly
    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = Some(optional);
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn optional(&self) -> Option<bool> {
        self.optional
    }

    /// Both ends are non-empty, so the target can be handed to the compiler
    pub fn is_complete(&self) -> bool {
        !self.source.is_empty() && !self.target.is_empty()
    }
}

/// A target after resolution: the `optional` decision has been made.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedTarget {
    pub source: String,
    pub target: String,
    pub optional: bool,
}

impl ResolvedTarget {
    pub fn new(source: impl Into<String>, target: impl Into<String>, optional: bool) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            optional,
        }
    }

    /// The `source:target` token passed to the compiler
    pub fn to_argument(&self) -> String {
        format!("{}:{}", self.source, self.target)
    }

    /// True when source and target name the same path (in-place compilation)
    pub fn is_in_place(&self) -> bool {
        self.source == self.target
    }
}

impl std::fmt::Display for ResolvedTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}
