//! Logging setup
//!
//! Console verbosity follows `RUST_LOG` (default `warn`), for example
//! `RUST_LOG=pragma_outline::update=debug`. Console output goes to stderr so
//! stdout carries nothing but the outline.
//!
//! Everything at debug level and above is also appended to
//! `<config dir>/logs/pragma-outline.log.<date>`, rotated daily.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE_PREFIX: &str = "pragma-outline.log";

/// Install the global subscriber
///
/// Keep the returned guard alive until exit; dropping it flushes the file log.
pub fn init() -> Option<WorkerGuard> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")));

    let (file, guard) = match crate::config_paths::ensure_logs_dir() {
        Ok(dir) => {
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX));
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_filter(EnvFilter::new("debug"));
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!("Warning: file logging disabled: {}", e);
            (None, None)
        }
    };

    tracing_subscriber::registry().with(console).with(file).init();
    guard
}
