//! Test environment builder for isolated sasskit testing.
//!
//! `TestEnv` owns a temp project directory and a fake compiler script kept
//! outside it. Commands run with `SASSKIT_BINARY` pointing at the script and
//! every other `SASSKIT_*` variable cleared.

use std::fs;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const SCRUBBED_VARS: [&str; 7] = [
    "SASSKIT_SNAPSHOT",
    "SASSKIT_ENVIRONMENT",
    "SASSKIT_SOURCE_FOLDER",
    "SASSKIT_TARGET_FOLDER",
    "SASSKIT_ARGUMENTS",
    "SASSKIT_GENERATE_SCOPED_CSS",
    "RUST_LOG",
];

/// Result of running a sasskit CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Non-empty stdout lines
    pub fn stdout_lines(&self) -> Vec<&str> {
        self.stdout.lines().filter(|l| !l.trim().is_empty()).collect()
    }
}

impl From<Output> for TestResult {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Isolated project directory with a fake compiler
pub struct TestEnv {
    pub project_root: TempDir,
    tools: TempDir,
    compiler: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn compiler(&self) -> &Path {
        &self.compiler
    }

    /// Directory outside the project for extra scripts and logs
    pub fn tools_dir(&self) -> &Path {
        self.tools.path()
    }

    /// Run sasskit from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.command(args)
            .stdin(Stdio::null())
            .output()
            .expect("Failed to execute sasskit")
            .into()
    }

    /// Run sasskit with `input` on stdin
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> TestResult {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to execute sasskit");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");
        child
            .wait_with_output()
            .expect("Failed to wait for sasskit")
            .into()
    }

    /// Command with the isolated environment applied, not yet spawned
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_sasskit"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("SASSKIT_BINARY", &self.compiler);
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }
}

/// Write `script` to `path` and make it executable
pub fn write_script(path: &Path, script: &str) {
    fs::write(path, script).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

/// Builder for TestEnv
#[derive(Default)]
pub struct TestEnvBuilder {
    folders: Vec<String>,
    files: Vec<(String, String)>,
    compiler: Option<String>,
}

impl TestEnvBuilder {
    /// Create a directory in the project
    pub fn with_folder(mut self, folder: &str) -> Self {
        self.folders.push(folder.to_string());
        self
    }

    /// Write a file in the project
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.push((path.to_string(), content.to_string()));
        self
    }

    pub fn with_config(self, json: &str) -> Self {
        self.with_file("sasscompiler.json", json)
    }

    /// Fake compiler script (defaults to [`REPORTING_COMPILER`](super::REPORTING_COMPILER))
    pub fn with_compiler(mut self, script: &str) -> Self {
        self.compiler = Some(script.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let project_root = TempDir::new().unwrap();
        let tools = TempDir::new().unwrap();

        for folder in &self.folders {
            fs::create_dir_all(project_root.path().join(folder)).unwrap();
        }
        for (path, content) in &self.files {
            let full = project_root.path().join(path);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(full, content).unwrap();
        }

        let compiler = tools.path().join("sass");
        let script = self
            .compiler
            .as_deref()
            .unwrap_or(super::fixtures::REPORTING_COMPILER);
        write_script(&compiler, script);

        TestEnv {
            project_root,
            tools,
            compiler,
        }
    }
}
