//! Process Tracker
//!
//! Remembers the compiler processes spawned through a
//! [`ProcessInvoker`](super::ProcessInvoker) that have not been waited on
//! yet, so the host can reap stragglers on shutdown. Also terminates
//! children gracefully.

use std::io;
use std::process::{Child, ExitStatus};
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, Signal, System};

use crate::domain::ports::ProcessRegistrar;

const TERMINATE_POLL: Duration = Duration::from_millis(25);

/// Registrar that keeps the PIDs of live children.
///
/// A PID leaves the list when its process is unregistered, so `reap` never
/// signals a PID the OS may have reused.
#[derive(Debug, Default)]
pub struct ProcessTracker {
    pids: Mutex<Vec<u32>>,
}

impl ProcessTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracked(&self) -> Vec<u32> {
        self.pids.lock().map(|p| p.clone()).unwrap_or_default()
    }

    /// Kill every tracked process that is still alive. Returns how many were signalled.
    pub fn reap(&self) -> usize {
        let pids: Vec<u32> = match self.pids.lock() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(_) => return 0,
        };
        if pids.is_empty() {
            return 0;
        }

        let targets: Vec<Pid> = pids.iter().copied().map(Pid::from_u32).collect();
        let mut sys = System::new();
        sys.refresh_processes_specifics(
            ProcessesToUpdate::Some(&targets),
            true,
            ProcessRefreshKind::nothing(),
        );

        let mut killed = 0;
        for pid in targets {
            if let Some(process) = sys.process(pid) {
                if process.kill() {
                    tracing::debug!(pid = pid.as_u32(), "reaped sass process");
                    killed += 1;
                }
            }
        }
        killed
    }
}

impl ProcessRegistrar for ProcessTracker {
    fn register(&self, pid: u32) {
        if let Ok(mut pids) = self.pids.lock() {
            pids.push(pid);
        }
    }

    fn unregister(&self, pid: u32) {
        if let Ok(mut pids) = self.pids.lock() {
            pids.retain(|tracked| *tracked != pid);
        }
    }
}

/// Ask a child to stop, then force it after `grace`.
///
/// Sends SIGTERM where the platform supports it so the compiler can finish
/// writing the file it is on. Falls back to a hard kill.
pub fn terminate(child: &mut Child, grace: Duration) -> io::Result<ExitStatus> {
    if let Some(status) = child.try_wait()? {
        return Ok(status);
    }

    if send_term(child.id()) {
        let deadline = Instant::now() + grace;
        while Instant::now() < deadline {
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }
            thread::sleep(TERMINATE_POLL);
        }
        tracing::debug!(pid = child.id(), "sass process ignored SIGTERM, killing");
    }

    match child.kill() {
        Ok(()) => {}
        // Exited between the last poll and the kill
        Err(e) if e.kind() == io::ErrorKind::InvalidInput => {}
        Err(e) => return Err(e),
    }
    child.wait()
}

fn send_term(pid: u32) -> bool {
    let pid = Pid::from_u32(pid);
    let mut sys = System::new();
    sys.refresh_processes_specifics(
        ProcessesToUpdate::Some(&[pid]),
        true,
        ProcessRefreshKind::nothing(),
    );
    sys.process(pid)
        .and_then(|process| process.kill_with(Signal::Term))
        .unwrap_or(false)
}
