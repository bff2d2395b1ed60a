//! Log Sink Implementations

mod tracing_sink;

pub use tracing_sink::TracingLogSink;
