//! Fake compilers and configuration files shared by CLI tests.
//!
//! The compilers are POSIX shell scripts that imitate only what the CLI
//! relies on: the `Compiled X to Y.` lines, stderr, and exit codes.

/// Reports one compiled file per `source:target` argument, like `--update`
pub const REPORTING_COMPILER: &str = r#"#!/bin/sh
for arg in "$@"; do
  case "$arg" in
    --*) ;;
    *:*) echo "Compiled ${arg%%:*}/site.scss to ${arg#*:}/site.css." ;;
  esac
done
"#;

/// Fails the way the real compiler does on a syntax error
pub const FAILING_COMPILER: &str = r#"#!/bin/sh
echo 'Error: expected "}".' >&2
echo '  ╷' >&2
echo '1 │ body { color: black;' >&2
exit 65
"#;

/// Prints every argument on its own line
pub const ARGS_COMPILER: &str = r#"#!/bin/sh
for arg in "$@"; do
  echo "$arg"
done
"#;

/// Copies stdin to stdout when `--stdin` is present
pub const ECHO_STDIN_COMPILER: &str = r#"#!/bin/sh
for arg in "$@"; do
  if [ "$arg" = "--stdin" ]; then
    cat
    exit 0
  fi
done
echo "missing --stdin" >&2
exit 64
"#;

/// Stays up like `sass --watch`
pub const WATCHING_COMPILER: &str = r#"#!/bin/sh
echo "Sass is watching for changes. Press Ctrl-C to stop."
exec sleep 30
"#;

pub const CONFIG_CUSTOM_FOLDERS: &str = r#"{
  "SourceFolder": "Sass",
  "TargetFolder": "public/css",
  "GenerateScopedCss": false
}"#;

pub const CONFIG_WITH_RELEASE_ARGUMENTS: &str = r#"{
  "GenerateScopedCss": false,
  "Arguments": "--error-css",
  "Configurations": {
    "Release": { "Arguments": "--quiet" }
  }
}"#;

pub const APPSETTINGS_WITH_SECTION: &str = r#"{
  "Logging": { "LogLevel": { "Default": "Information" } },
  "SassCompiler": {
    "SourceFolder": "Assets",
    "GenerateScopedCss": false
  }
}"#;
