//! Argument Builder
//!
//! Turns options plus a resolved target set into the argument vector for the
//! compiler binary. Pure apart from the source existence checks it delegates
//! to the [`FileSystem`] port.
//!
//! Layout of the produced vector:
//!
//! ```text
//! [snapshot] [--watch] <free flags> [--style=..] [--[no-]source-map]
//!     <--load-path=..> <source:target ..> [--update | --stdin]
//! ```

use std::path::{Path, PathBuf};

use crate::config::CompilerOptions;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{quote_for_display, BuildMode, ResolvedTarget};
use crate::error::{SassError, SassResult};

use super::target_resolver::ResolvedTargetSet;

pub const WATCH_FLAG: &str = "--watch";
pub const INTERACTIVE_FLAG: &str = "--interactive";
pub const UPDATE_FLAG: &str = "--update";
pub const STDIN_FLAG: &str = "--stdin";

/// What kind of compiler run the arguments are for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    /// One-shot batch compile of the target set, only what changed
    Update,
    /// One-shot compile of a single document read from standard input
    Stdin,
    /// Long-running watch process
    Watch,
    /// One-shot run with caller-supplied inputs; nothing appended
    Raw,
}

impl Invocation {
    pub fn is_one_shot(&self) -> bool {
        !matches!(self, Invocation::Watch)
    }
}

/// Arguments ready to pass to the process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuiltArguments {
    pub args: Vec<String>,
    /// Targets left out because their source does not exist
    pub skipped: Vec<ResolvedTarget>,
    /// Number of `source:target` pairs emitted
    pub input_count: usize,
}

impl BuiltArguments {
    /// Missing sources that were required (only possible for watch builds)
    pub fn skipped_required(&self) -> impl Iterator<Item = &ResolvedTarget> {
        self.skipped.iter().filter(|t| !t.optional)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.args.iter().any(|a| a == token)
    }
}

/// Builds validated compiler argument vectors
pub struct ArgumentBuilder<'a, F: FileSystem> {
    options: &'a CompilerOptions,
    fs: F,
    root: PathBuf,
    build_mode: Option<BuildMode>,
}

impl<'a, F: FileSystem> ArgumentBuilder<'a, F> {
    pub fn new(options: &'a CompilerOptions, fs: F) -> Self {
        Self {
            options,
            fs,
            root: PathBuf::from("."),
            build_mode: None,
        }
    }

    /// Directory relative sources are checked against
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Inject style and source-map defaults for this mode when unset.
    ///
    /// Without a build mode no defaults are injected and the compiler's own
    /// defaults apply.
    pub fn with_build_mode(mut self, mode: BuildMode) -> Self {
        self.build_mode = Some(mode);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn build(
        &self,
        invocation: Invocation,
        targets: &ResolvedTargetSet,
        extra_flags: &[String],
    ) -> SassResult<BuiltArguments> {
        let flags = validated_flags(
            self.options
                .argument_tokens()
                .into_iter()
                .chain(extra_flags.iter().cloned()),
            invocation,
        )?;

        let mut built = BuiltArguments::default();

        if let Some(snapshot) = self.options.snapshot.as_deref().filter(|s| !s.is_empty()) {
            built.args.push(snapshot.to_string());
        }

        if invocation == Invocation::Watch {
            built.args.push(WATCH_FLAG.to_string());
        }

        if let Some(mode) = self.build_mode {
            let style = (!flags.iter().any(|f| is_style_flag(f))).then(|| mode.style_flag());
            let source_map = (!flags.iter().any(|f| is_source_map_flag(f)))
                .then(|| mode.source_map_flag().to_string());
            built.args.extend(flags);
            built.args.extend(style);
            built.args.extend(source_map);
        } else {
            built.args.extend(flags);
        }

        built.args.extend(
            self.options
                .include_paths
                .iter()
                .filter(|p| !p.is_empty())
                .map(|p| format!("--load-path={}", p)),
        );

        match invocation {
            Invocation::Update | Invocation::Watch => {
                let check = targets.partition_existing(&self.fs, &self.root);
                if invocation == Invocation::Update {
                    check.require_all()?;
                }
                built.input_count = check.present.len();
                built
                    .args
                    .extend(check.present.iter().map(ResolvedTarget::to_argument));
                built.skipped = check.missing;
                if invocation == Invocation::Update {
                    built.args.push(UPDATE_FLAG.to_string());
                }
            }
            Invocation::Stdin => {
                built.input_count = 1;
                built.args.push(STDIN_FLAG.to_string());
            }
            Invocation::Raw => {}
        }

        Ok(built)
    }
}

/// Reject or strip flags that do not fit the invocation.
///
/// `--interactive` is never allowed. `--watch` is rejected for one-shot runs
/// and stripped for watch runs, which add their own exactly once.
fn validated_flags(
    flags: impl Iterator<Item = String>,
    invocation: Invocation,
) -> SassResult<Vec<String>> {
    let mut kept = Vec::new();
    for flag in flags {
        if flag == WATCH_FLAG {
            if invocation.is_one_shot() {
                return Err(SassError::UnsupportedArgument { flag });
            }
            continue;
        }
        if flag == INTERACTIVE_FLAG {
            return Err(SassError::UnsupportedArgument { flag });
        }
        kept.push(flag);
    }
    Ok(kept)
}

fn is_style_flag(flag: &str) -> bool {
    flag == "--style" || flag == "-s" || flag.starts_with("--style=")
}

fn is_source_map_flag(flag: &str) -> bool {
    flag == "--source-map" || flag == "--no-source-map"
}

/// Render a command line for logs, quoting tokens that contain whitespace
pub fn render_command_line(program: &Path, args: &[String]) -> String {
    std::iter::once(quote_for_display(&program.display().to_string()))
        .chain(args.iter().map(|a| quote_for_display(a)))
        .collect::<Vec<_>>()
        .join(" ")
}
