//! Watch supervisor implementation
//!
//! One actor thread per supervisor owns the child process. It blocks on the
//! control channel with a short timeout, polls the child for exit, and
//! decides synchronously whether to restart. `stop()` sets the stopping flag
//! under the same lock the actor checks before every transition, so a
//! natural exit racing a stop never schedules a restart.

use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;
use std::process::Child;
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::config::CompilerOptions;
use crate::domain::ports::{LogLevel, LogSink, ProcessRegistrar, SassCommand};
use crate::domain::services::{ArgumentBuilder, Invocation, TargetResolver};
use crate::domain::value_objects::BuildMode;
use crate::error::SassResult;
use crate::infrastructure::fs::LocalFs;
use crate::infrastructure::logging::TracingLogSink;
use crate::infrastructure::process::{terminate, ProcessInvoker};

use super::state::{describe_delay, WatchState, POLL_INTERVAL, RESTART_DELAY, STOP_GRACE};

enum Control {
    Stop,
}

#[derive(Debug, Default)]
struct Shared {
    state: WatchState,
    stopping: bool,
    restarts: u32,
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Everything needed to (re)spawn the watch process
#[derive(Clone)]
struct Launcher {
    options: CompilerOptions,
    program: PathBuf,
    project_root: PathBuf,
    build_mode: Option<BuildMode>,
    extra_flags: Vec<String>,
    invoker: ProcessInvoker,
    sink: Arc<dyn LogSink>,
}

impl Launcher {
    /// Resolve, build and spawn. `Ok(None)` means no source exists yet.
    fn launch(&self) -> SassResult<Option<Child>> {
        let targets = TargetResolver::resolve(&self.options);
        let mut builder =
            ArgumentBuilder::new(&self.options, LocalFs::new()).with_root(&self.project_root);
        if let Some(mode) = self.build_mode {
            builder = builder.with_build_mode(mode);
        }
        let built = builder.build(Invocation::Watch, &targets, &self.extra_flags)?;

        for target in built.skipped_required() {
            self.sink.warn(&format!(
                "Sass source folder {} does not exist, skipping it.",
                target.source
            ));
        }
        if built.input_count == 0 {
            self.sink.warn("No Sass sources to watch, waiting for one to appear.");
            return Ok(None);
        }

        let mut child = self.invoker.spawn(&self.program, &built.args)?;
        pump_lines(child.stdout.take(), self.sink.clone(), LogLevel::Info);
        pump_lines(child.stderr.take(), self.sink.clone(), LogLevel::Error);
        self.sink.info("Started Sass watch");
        Ok(Some(child))
    }
}

/// Forward each non-blank line of `pipe` to the sink until end of stream
fn pump_lines<R>(pipe: Option<R>, sink: Arc<dyn LogSink>, level: LogLevel)
where
    R: Read + Send + 'static,
{
    let Some(pipe) = pipe else {
        return;
    };

    let spawned = thread::Builder::new()
        .name("sass-output".to_string())
        .spawn(move || {
            let mut reader = BufReader::new(pipe);
            let mut buf = Vec::new();
            loop {
                buf.clear();
                match reader.read_until(b'\n', &mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(_) => {
                        let text = String::from_utf8_lossy(&buf);
                        let line = text.trim_end_matches(['\r', '\n']);
                        if !line.trim().is_empty() {
                            sink.log(level, line);
                        }
                    }
                }
            }
        });

    if let Err(e) = spawned {
        tracing::warn!(error = %e, "failed to start sass output reader");
    }
}

enum Wake {
    Stop,
    Exited,
}

struct Actor {
    launcher: Launcher,
    shared: Arc<Mutex<Shared>>,
    control: Receiver<Control>,
    restart_delay: Duration,
}

impl Actor {
    fn run(self, mut child: Option<Child>) {
        loop {
            if let Some(mut process) = child.take() {
                if let Wake::Stop = self.wait_for_exit(&mut process) {
                    self.shutdown(&mut process);
                    return;
                }
                drop(process);

                if !self.transition(WatchState::Restarting) {
                    return;
                }
                self.launcher.sink.warn(&format!(
                    "Sass compiler exited, restarting in {}.",
                    describe_delay(self.restart_delay)
                ));
            }

            match self.control.recv_timeout(self.restart_delay) {
                Ok(Control::Stop) | Err(RecvTimeoutError::Disconnected) => return,
                Err(RecvTimeoutError::Timeout) => {}
            }

            match self.launcher.launch() {
                Ok(Some(mut process)) => {
                    if !self.transition(WatchState::Running) {
                        self.shutdown(&mut process);
                        return;
                    }
                    child = Some(process);
                }
                Ok(None) => {}
                Err(e) => self
                    .launcher
                    .sink
                    .error(&format!("Failed to restart Sass compiler: {}", e)),
            }
        }
    }

    fn wait_for_exit(&self, process: &mut Child) -> Wake {
        loop {
            match self.control.recv_timeout(POLL_INTERVAL) {
                Ok(Control::Stop) | Err(RecvTimeoutError::Disconnected) => return Wake::Stop,
                Err(RecvTimeoutError::Timeout) => {}
            }
            match process.try_wait() {
                Ok(None) => {}
                Ok(Some(status)) => {
                    tracing::debug!(?status, "sass watch process exited");
                    self.launcher.invoker.release(process.id());
                    return Wake::Exited;
                }
                Err(e) => {
                    self.launcher
                        .sink
                        .error(&format!("Lost track of Sass compiler: {}", e));
                    self.abandon(process);
                    return Wake::Exited;
                }
            }
        }
    }

    /// Move to `next` unless a stop has been requested. Check and update
    /// happen under one lock.
    fn transition(&self, next: WatchState) -> bool {
        let mut shared = lock(&self.shared);
        if shared.stopping {
            return false;
        }
        if next == WatchState::Restarting {
            shared.restarts += 1;
        }
        shared.state = next;
        true
    }

    fn shutdown(&self, process: &mut Child) {
        match terminate(process, STOP_GRACE) {
            Ok(_) => self.launcher.invoker.release(process.id()),
            Err(e) => tracing::warn!(error = %e, "failed to terminate sass watch process"),
        }
    }

    /// Kill a child whose status can no longer be queried. Its PID stays
    /// registered unless the wait succeeds.
    fn abandon(&self, process: &mut Child) {
        if let Err(e) = process.kill() {
            if e.kind() != std::io::ErrorKind::InvalidInput {
                self.launcher
                    .sink
                    .warn(&format!("Failed to kill Sass compiler: {}", e));
            }
        }
        match process.wait() {
            Ok(_) => self.launcher.invoker.release(process.id()),
            Err(e) => self
                .launcher
                .sink
                .warn(&format!("Failed to reap Sass compiler: {}", e)),
        }
    }
}

/// Keeps a `--watch` compiler process alive until stopped
pub struct WatchSupervisor {
    launcher: Launcher,
    restart_delay: Duration,
    shared: Arc<Mutex<Shared>>,
    control: Option<Sender<Control>>,
    actor: Option<JoinHandle<()>>,
}

impl WatchSupervisor {
    /// Supervisor for `command` with the given options.
    ///
    /// Runs in the current directory, in Debug mode, logging through `tracing`.
    pub fn new(options: CompilerOptions, command: SassCommand) -> Self {
        let options = crate::application::with_command_snapshot(options, &command);
        Self {
            launcher: Launcher {
                options,
                program: command.program,
                project_root: PathBuf::from("."),
                build_mode: Some(BuildMode::Debug),
                extra_flags: Vec::new(),
                invoker: ProcessInvoker::new(),
                sink: Arc::new(TracingLogSink),
            },
            restart_delay: RESTART_DELAY,
            shared: Arc::new(Mutex::new(Shared::default())),
            control: None,
            actor: None,
        }
    }

    /// Directory the compiler runs in; relative sources resolve against it
    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        self.launcher.invoker = self.launcher.invoker.clone().with_working_dir(&root);
        self.launcher.project_root = root;
        self
    }

    /// Style and source-map defaults, or `None` to leave them to the compiler
    pub fn with_build_mode(mut self, mode: Option<BuildMode>) -> Self {
        self.launcher.build_mode = mode;
        self
    }

    pub fn with_extra_flags(mut self, flags: Vec<String>) -> Self {
        self.launcher.extra_flags = flags;
        self
    }

    pub fn with_log_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.launcher.sink = sink;
        self
    }

    pub fn with_registrar(mut self, registrar: Arc<dyn ProcessRegistrar>) -> Self {
        self.launcher.invoker = self.launcher.invoker.clone().with_registrar(registrar);
        self
    }

    pub fn with_restart_delay(mut self, delay: Duration) -> Self {
        self.restart_delay = delay;
        self
    }

    pub fn state(&self) -> WatchState {
        lock(&self.shared).state
    }

    /// Number of times the process exited unexpectedly and was scheduled for restart
    pub fn restart_count(&self) -> u32 {
        lock(&self.shared).restarts
    }

    /// Spawn the watch process.
    ///
    /// Errors building arguments or spawning the first process are returned
    /// (and logged); after that, failures only show up in the log. Calling
    /// `start` on a started supervisor does nothing.
    pub fn start(&mut self) -> SassResult<()> {
        if self.actor.is_some() {
            return Ok(());
        }

        let child = match self.launcher.launch() {
            Ok(child) => child,
            Err(e) => {
                self.launcher.sink.error(&e.to_string());
                return Err(e);
            }
        };

        {
            let mut shared = lock(&self.shared);
            shared.stopping = false;
            shared.state = if child.is_some() {
                WatchState::Running
            } else {
                WatchState::Restarting
            };
        }

        let (tx, rx) = channel();
        let actor = Actor {
            launcher: self.launcher.clone(),
            shared: Arc::clone(&self.shared),
            control: rx,
            restart_delay: self.restart_delay,
        };

        let spawned = thread::Builder::new()
            .name("sass-watch".to_string())
            .spawn(move || actor.run(child));

        match spawned {
            Ok(handle) => {
                self.control = Some(tx);
                self.actor = Some(handle);
                Ok(())
            }
            Err(e) => {
                // A spawned child is now unsupervised; only a registrar can reap it
                lock(&self.shared).state = WatchState::Stopped;
                Err(e.into())
            }
        }
    }

    /// Stop the watch process and wait for the actor to finish. Idempotent.
    pub fn stop(&mut self) {
        lock(&self.shared).stopping = true;

        if let Some(control) = self.control.take() {
            let _ = control.send(Control::Stop);
        }
        if let Some(actor) = self.actor.take() {
            if actor.join().is_err() {
                tracing::warn!("sass watch thread panicked");
            }
            tracing::debug!("sass watch stopped");
        }

        lock(&self.shared).state = WatchState::Stopped;
    }
}

impl Drop for WatchSupervisor {
    fn drop(&mut self) {
        self.stop();
    }
}
