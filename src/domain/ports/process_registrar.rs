//! Process Registrar Port
//!
//! A process-tree tracker that can reap spawned compiler processes if the
//! host terminates abnormally. The invoker calls `register` exactly once per
//! successfully spawned process, before it starts awaiting output, and
//! `unregister` once the process has been waited on. A PID is only
//! meaningful between the two: after the wait the OS may hand it out again.

/// Receives the PID of every compiler process that was spawned
pub trait ProcessRegistrar: Send + Sync {
    fn register(&self, pid: u32);

    /// The process with this PID has exited and been reaped
    fn unregister(&self, _pid: u32) {}
}

/// Registrar that tracks nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRegistrar;

impl ProcessRegistrar for NoopRegistrar {
    fn register(&self, _pid: u32) {}
}

impl<T: ProcessRegistrar + ?Sized> ProcessRegistrar for std::sync::Arc<T> {
    fn register(&self, pid: u32) {
        (**self).register(pid)
    }

    fn unregister(&self, pid: u32) {
        (**self).unregister(pid)
    }
}
