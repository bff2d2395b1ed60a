use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use sasskit::application::CompileUseCase;
use sasskit::config::CompilerOptions;

pub fn cmd_stdin(binary: Option<&Path>, flags: &[String]) -> Result<()> {
    let command = super::locate_binary(binary)?;

    let mut input = Vec::new();
    std::io::stdin()
        .read_to_end(&mut input)
        .context("failed to read standard input")?;

    let css = CompileUseCase::new(CompilerOptions::empty(), command)
        .compile_stdin(&input, flags)
        .inspect_err(|e| {
            if let Some(stderr) = e.error_output() {
                eprint!("{}", stderr);
            }
        })?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&css)?;
    stdout.flush()?;
    Ok(())
}
