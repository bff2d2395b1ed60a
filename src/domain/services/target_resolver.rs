//! Target Resolver
//!
//! Turns [`CompilerOptions`] into the ordered, deduplicated list of
//! compilation targets: the default pair first, then explicit compilations,
//! then convention-based scoped folders. Order matters: it is the order the
//! compiler sees, and compiler-side precedence follows it.

use std::collections::HashSet;
use std::path::Path;

use crate::config::CompilerOptions;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{CompilationTarget, ResolvedTarget};
use crate::error::{SassError, SassResult};

/// Ordered targets, each with a final `optional` decision
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedTargetSet {
    targets: Vec<ResolvedTarget>,
}

impl ResolvedTargetSet {
    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedTarget> {
        self.targets.iter()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn as_slice(&self) -> &[ResolvedTarget] {
        &self.targets
    }

    /// Check every source on disk.
    ///
    /// Returns the targets whose source exists plus the ones that were
    /// skipped. Missing optional sources are always skipped silently.
    pub fn partition_existing<F: FileSystem>(&self, fs: &F, root: &Path) -> SourceCheck {
        let mut present = Vec::new();
        let mut missing = Vec::new();
        for target in &self.targets {
            if fs.exists(&root.join(&target.source)) {
                present.push(target.clone());
            } else {
                missing.push(target.clone());
            }
        }
        SourceCheck { present, missing }
    }
}

impl<'a> IntoIterator for &'a ResolvedTargetSet {
    type Item = &'a ResolvedTarget;
    type IntoIter = std::slice::Iter<'a, ResolvedTarget>;

    fn into_iter(self) -> Self::IntoIter {
        self.targets.iter()
    }
}

/// Outcome of checking sources against the file system
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceCheck {
    pub present: Vec<ResolvedTarget>,
    pub missing: Vec<ResolvedTarget>,
}

impl SourceCheck {
    /// Missing sources that were not allowed to be missing
    pub fn missing_required(&self) -> impl Iterator<Item = &ResolvedTarget> {
        self.missing.iter().filter(|t| !t.optional)
    }

    /// Fail on the first missing non-optional source (one-shot behaviour)
    pub fn require_all(&self) -> SassResult<()> {
        match self.missing_required().next() {
            Some(target) => Err(SassError::MissingRequiredSource {
                path: target.source.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// Resolves configuration into compilation targets
pub struct TargetResolver;

impl TargetResolver {
    pub fn resolve(options: &CompilerOptions) -> ResolvedTargetSet {
        let mut seen: HashSet<String> = HashSet::new();
        let mut targets = Vec::new();

        let default = &options.default_compilation;
        if default.is_complete() {
            // The built-in pair may be absent when other work is configured;
            // a pair the user chose must exist.
            let optional = default
                .optional()
                .unwrap_or(options.uses_default_pair() && options.has_additional_work());
            seen.insert(default.source().to_string());
            targets.push(resolved(default, optional));
        }

        for explicit in options
            .explicit_compilations
            .iter()
            .filter(|c| c.is_complete())
        {
            seen.insert(explicit.source().to_string());
            targets.push(resolved(explicit, explicit.optional().unwrap_or(false)));
        }

        if options.generate_scoped_outputs {
            for name in &options.scoped_folder_names {
                if name.is_empty() || seen.contains(name) {
                    continue;
                }
                seen.insert(name.clone());
                targets.push(ResolvedTarget::new(name.clone(), name.clone(), true));
            }
        }

        ResolvedTargetSet { targets }
    }
}

fn resolved(target: &CompilationTarget, optional: bool) -> ResolvedTarget {
    ResolvedTarget::new(target.source(), target.target(), optional)
}
