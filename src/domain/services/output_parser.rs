//! Compiler output parsing
//!
//! The compiler reports each file written during an `--update` run as
//! `Compiled <source> to <destination>.` on standard output.

use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static COMPILED_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Compiled (.+ to .+)\.$").expect("compiled-line pattern is valid")
});

const SEPARATOR: &str = " to ";
const STYLESHEET_EXTENSIONS: [&str; 3] = [".scss", ".sass", ".css"];

/// One file the compiler reported as written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledFile {
    pub source: PathBuf,
    pub destination: PathBuf,
}

pub struct OutputParser;

impl OutputParser {
    /// Destinations of every `Compiled ... to ....` line, in output order.
    ///
    /// Lines that do not match are ignored, as are lines split by `\r\n`.
    pub fn parse(output: &str) -> Vec<PathBuf> {
        Self::parse_compiled(output)
            .into_iter()
            .map(|file| file.destination)
            .collect()
    }

    pub fn parse_compiled(output: &str) -> Vec<CompiledFile> {
        output
            .lines()
            .filter_map(|line| {
                let captures = COMPILED_LINE.captures(line.trim_end_matches('\r'))?;
                let (source, destination) = split_source(&captures[1])?;
                Some(CompiledFile {
                    source: PathBuf::from(source),
                    destination: PathBuf::from(destination),
                })
            })
            .collect()
    }
}

/// Split `<source> to <destination>` at the first separator preceded by a
/// stylesheet extension, or at the first separator when none is.
fn split_source(body: &str) -> Option<(&str, &str)> {
    let mut splits = body
        .match_indices(SEPARATOR)
        .map(|(at, _)| (&body[..at], &body[at + SEPARATOR.len()..]))
        .filter(|(source, destination)| !source.is_empty() && !destination.is_empty());
    let first = splits.clone().next()?;
    Some(
        splits
            .find(|(source, _)| STYLESHEET_EXTENSIONS.iter().any(|ext| source.ends_with(ext)))
            .unwrap_or(first),
    )
}
