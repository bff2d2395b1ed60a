pub mod compile;
pub mod project_root;
pub mod stdin;
pub mod watch;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sasskit::config::{load_options, LoadedOptions};
use sasskit::domain::ports::{BinaryLocator, SassCommand};
use sasskit::infrastructure::PlatformBinaryLocator;

use crate::cli::ProjectArgs;

/// Resolve `--binary`, then the environment and platform defaults
pub(crate) fn locate_binary(binary: Option<&Path>) -> Result<SassCommand> {
    let mut locator = PlatformBinaryLocator::from_env();
    if let Some(binary) = binary {
        locator = locator.with_binary(binary);
    }
    let command = locator.locate()?;
    tracing::debug!(program = %command.program.display(), "located sass");
    Ok(command)
}

/// Project root plus its loaded configuration; config warnings are logged
pub(crate) fn load_project(args: &ProjectArgs) -> Result<(PathBuf, LoadedOptions)> {
    let root = match &args.project {
        Some(project) => project.clone(),
        None => {
            let cwd = std::env::current_dir().context("cannot determine current directory")?;
            project_root::discover_project_root(&cwd)
        }
    };

    let loaded = load_options(&root, args.configuration.as_deref())
        .with_context(|| format!("failed to load configuration from {}", root.display()))?;
    for warning in &loaded.warnings {
        tracing::warn!("{}", warning);
    }
    for file in &loaded.files {
        tracing::debug!(file = %file.display(), "loaded configuration");
    }

    Ok((root, loaded))
}
