//! Log Sink Port
//!
//! Leveled text lines. Compiler chatter from a watch process is forwarded
//! here line by line (info for stdout, error for stderr), and it is the only
//! signal the watch supervisor gives its owner after startup.

/// Severity of a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Trait for receiving log lines
///
/// Implementations can be:
/// - TracingLogSink: forwards to `tracing`
/// - NoopLogSink: silent operation
pub trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, line: &str);

    fn debug(&self, line: &str) {
        self.log(LogLevel::Debug, line);
    }

    fn info(&self, line: &str) {
        self.log(LogLevel::Info, line);
    }

    fn warn(&self, line: &str) {
        self.log(LogLevel::Warn, line);
    }

    fn error(&self, line: &str) {
        self.log(LogLevel::Error, line);
    }
}

/// No-op sink for silent operation
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    fn log(&self, _level: LogLevel, _line: &str) {}
}

impl<T: LogSink + ?Sized> LogSink for std::sync::Arc<T> {
    fn log(&self, level: LogLevel, line: &str) {
        (**self).log(level, line)
    }
}
