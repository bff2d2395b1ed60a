//! sasskit CLI - drive the Sass compiler for a project
//!
//! Usage: sasskit <COMMAND>
//!
//! Commands:
//!   compile  Compile every configured target once
//!   watch    Keep a sass --watch process running until Ctrl+C
//!   stdin    Compile standard input to standard output

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    sasskit::logging::init(cli.verbose);

    match &cli.command {
        Commands::Compile { project } => commands::compile::cmd_compile(project, cli.json),
        Commands::Watch { project } => commands::watch::cmd_watch(project),
        Commands::Stdin { binary, flags } => commands::stdin::cmd_stdin(binary.as_deref(), flags),
    }
}
