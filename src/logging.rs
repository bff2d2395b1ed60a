//! Log output for the sasskit binary.
//!
//! Compact timestamped lines on stderr, so stdout stays free for compiled
//! CSS. Compiler output is logged under the `sass` target.
//!
//! # Environment Variable
//!
//! `RUST_LOG` takes precedence over `-v`:
//! ```bash
//! RUST_LOG=debug sasskit compile
//! RUST_LOG=sass=error sasskit watch
//! ```

use std::sync::Once;

use is_terminal::IsTerminal;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: Once = Once::new();

/// Compact time format: HH:MM:SS.mmm
struct CompactTime;

impl FormatTime for CompactTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Filter directives for a `-v` count.
///
/// Without `-v` only compiler chatter and warnings are shown.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn,sass=info",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize logging. Only the first call takes effect.
pub fn init(verbosity: u8) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(default_filter(verbosity))
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_target(verbosity > 0)
            .with_timer(CompactTime)
            .with_level(true)
            .with_filter(filter);

        tracing_subscriber::registry().with(fmt_layer).init();
    });
}
