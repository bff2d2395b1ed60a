use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// sasskit - drive the Sass compiler for a project
#[derive(Parser, Debug)]
#[command(name = "sasskit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by commands that work on a project
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Project directory (defaults to the nearest directory with a config file)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Build configuration name, e.g. Debug or Release
    #[arg(short, long)]
    pub configuration: Option<String>,

    /// Path to the sass executable (overrides SASSKIT_BINARY)
    #[arg(long)]
    pub binary: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile every configured target once (only what changed)
    Compile {
        #[command(flatten)]
        project: ProjectArgs,
    },

    /// Keep a sass --watch process running until Ctrl+C
    Watch {
        #[command(flatten)]
        project: ProjectArgs,
    },

    /// Compile standard input to standard output
    Stdin {
        /// Path to the sass executable (overrides SASSKIT_BINARY)
        #[arg(long)]
        binary: Option<PathBuf>,

        /// Flags passed to sass (after `--`)
        #[arg(last = true)]
        flags: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_compile_with_project_args() {
        let cli = Cli::try_parse_from([
            "sasskit",
            "compile",
            "--project",
            "site",
            "-c",
            "Debug",
            "--binary",
            "/usr/bin/sass",
        ])
        .unwrap();

        match cli.command {
            Commands::Compile { project } => {
                assert_eq!(project.project, Some(PathBuf::from("site")));
                assert_eq!(project.configuration.as_deref(), Some("Debug"));
                assert_eq!(project.binary, Some(PathBuf::from("/usr/bin/sass")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["sasskit", "compile", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_stdin_collects_trailing_flags() {
        let cli =
            Cli::try_parse_from(["sasskit", "stdin", "--", "--style=compressed", "--quiet"])
                .unwrap();

        match cli.command {
            Commands::Stdin { flags, .. } => {
                assert_eq!(flags, vec!["--style=compressed", "--quiet"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["sasskit"]).is_err());
    }
}
