//! Tracing Log Sink
//!
//! Forwards compiler output lines to `tracing` under the `sass` target, so
//! `RUST_LOG=sass=warn` quiets the compiler without touching sasskit's own logs.

use crate::domain::ports::{LogLevel, LogSink};

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn log(&self, level: LogLevel, line: &str) {
        match level {
            LogLevel::Debug => tracing::debug!(target: "sass", "{}", line),
            LogLevel::Info => tracing::info!(target: "sass", "{}", line),
            LogLevel::Warn => tracing::warn!(target: "sass", "{}", line),
            LogLevel::Error => tracing::error!(target: "sass", "{}", line),
        }
    }
}
