//! Process Invoker
//!
//! Runs the compiler as a child process with piped output. Both pipes are
//! drained concurrently so a chatty compiler cannot deadlock on a full
//! stderr buffer while stdout is still being read.

use std::borrow::Cow;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::sync::Arc;

use crate::domain::ports::{NoopRegistrar, ProcessRegistrar};
use crate::domain::services::render_command_line;
use crate::error::{SassError, SassResult};

/// Everything a finished compiler run produced.
///
/// Both streams are kept as raw bytes; decode with [`stdout_text`](Self::stdout_text)
/// and [`stderr_text`](Self::stderr_text) where text is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// `-1` when the process was killed by a signal
    pub exit_code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ProcessOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    pub fn stdout_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stdout)
    }

    pub fn stderr_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stderr)
    }

    /// Turn a nonzero exit into [`SassError::CompileFailed`]
    pub fn into_success(self) -> SassResult<Self> {
        if self.success() {
            Ok(self)
        } else {
            Err(SassError::CompileFailed {
                exit_code: self.exit_code,
                stderr: self.stderr_text().into_owned(),
            })
        }
    }
}

/// Spawns compiler processes and registers them for cleanup
#[derive(Clone)]
pub struct ProcessInvoker {
    registrar: Arc<dyn ProcessRegistrar>,
    working_dir: Option<PathBuf>,
}

impl Default for ProcessInvoker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ProcessInvoker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessInvoker")
            .field("working_dir", &self.working_dir)
            .finish_non_exhaustive()
    }
}

impl ProcessInvoker {
    pub fn new() -> Self {
        Self {
            registrar: Arc::new(NoopRegistrar),
            working_dir: None,
        }
    }

    /// Register every spawned PID with this registrar
    pub fn with_registrar(mut self, registrar: Arc<dyn ProcessRegistrar>) -> Self {
        self.registrar = registrar;
        self
    }

    /// Run the compiler from this directory (relative sources resolve here)
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    /// Run to completion, feeding `stdin` if given, and capture both streams.
    ///
    /// A nonzero exit is not an error here; see [`ProcessOutcome::into_success`].
    pub fn invoke(
        &self,
        program: &Path,
        args: &[String],
        stdin: Option<&[u8]>,
    ) -> SassResult<ProcessOutcome> {
        let mut command = self.command(program, args);
        command
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = command.spawn().map_err(|e| spawn_error(program, e))?;
        let pid = child.id();
        self.registrar.register(pid);

        let stdout_pipe = child.stdout.take();
        let stderr_pipe = child.stderr.take();
        let stdin_pipe = child.stdin.take();

        let (stdout, stderr, written) = std::thread::scope(|scope| {
            let out = scope.spawn(move || read_all(stdout_pipe));
            let err = scope.spawn(move || read_all(stderr_pipe));

            let written = match (stdin_pipe, stdin) {
                (Some(mut pipe), Some(bytes)) => {
                    let result = pipe.write_all(bytes);
                    // Close stdin so the compiler sees end of input
                    drop(pipe);
                    result
                }
                _ => Ok(()),
            };

            (join_reader(out), join_reader(err), written)
        });

        let status = child.wait()?;
        self.registrar.unregister(pid);
        let stdout = stdout?;
        let stderr = stderr?;
        // The compiler may exit before reading all input; its exit code says why.
        if let Err(e) = written {
            if e.kind() != io::ErrorKind::BrokenPipe {
                return Err(e.into());
            }
        }

        let exit_code = status.code().unwrap_or(-1);
        tracing::debug!(exit_code, "sass process finished");

        Ok(ProcessOutcome {
            exit_code,
            stdout,
            stderr,
        })
    }

    /// Spawn a long-running process with piped stdout and stderr.
    ///
    /// The caller owns the child and must drain both pipes. Once the child
    /// has been waited on, hand its PID back with [`release`](Self::release).
    pub fn spawn(&self, program: &Path, args: &[String]) -> SassResult<Child> {
        let mut command = self.command(program, args);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let child = command.spawn().map_err(|e| spawn_error(program, e))?;
        self.registrar.register(child.id());
        Ok(child)
    }

    /// Forget a spawned process after it has been waited on
    pub fn release(&self, pid: u32) {
        self.registrar.unregister(pid);
    }

    fn command(&self, program: &Path, args: &[String]) -> Command {
        tracing::debug!(command = %render_command_line(program, args), "running sass");

        let mut command = Command::new(program);
        command.args(args);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }
        command
    }
}

fn spawn_error(program: &Path, error: io::Error) -> SassError {
    if error.kind() == io::ErrorKind::NotFound {
        SassError::BinaryNotFound {
            searched: Some(program.to_path_buf()),
        }
    } else {
        SassError::ProcessIo(error)
    }
}

fn read_all<R: Read>(pipe: Option<R>) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        pipe.read_to_end(&mut buf)?;
    }
    Ok(buf)
}

fn join_reader(
    handle: std::thread::ScopedJoinHandle<'_, io::Result<Vec<u8>>>,
) -> io::Result<Vec<u8>> {
    handle
        .join()
        .unwrap_or_else(|_| Err(io::Error::other("output reader thread panicked")))
}
