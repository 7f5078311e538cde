//! Tracing setup
//!
//! Two layers: a console layer on stderr filtered by `-v` count (or
//! `TELEGRAF_DEPLOY_LOG`), and a trace-level transcript appended to the log
//! file through a non-blocking writer whatever the console shows.

use std::fs::{self, OpenOptions};
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

/// Overrides the console filter, e.g. `TELEGRAF_DEPLOY_LOG=telegraf_deploy=trace`
pub const LOG_ENV: &str = "TELEGRAF_DEPLOY_LOG";

/// Transcript filter: everything this crate and the agent emit, warnings
/// from dependencies
pub const TRANSCRIPT_DIRECTIVE: &str = "warn,telegraf_deploy=trace,agent=trace";

/// Console filter directive for a `-v` count
pub fn console_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// Returns the guard flushing the transcript; keep it alive until exit.
/// When the log file cannot be opened the run continues with console
/// logging only.
pub fn init(log_path: &Path, verbosity: u8) -> Option<WorkerGuard> {
    let console_filter = std::env::var(LOG_ENV)
        .ok()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(console_directive(verbosity)));
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbosity > 1)
        .without_time()
        .with_filter(console_filter);

    let (file_layer, guard, open_error) = match open_log(log_path) {
        Ok(file) => {
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .with_timer(ChronoUtc::rfc_3339())
                .with_ansi(false)
                .with_target(true)
                .with_writer(writer)
                .with_filter(EnvFilter::new(TRANSCRIPT_DIRECTIVE));
            (Some(layer), Some(guard), None)
        }
        Err(e) => (None, None, Some(e)),
    };

    // Ignore error if already set
    let _ = Registry::default().with(console).with(file_layer).try_init();

    match open_error {
        Some(e) => tracing::warn!(
            log_path = %log_path.display(),
            error = %e,
            "cannot open log file; logging to console only"
        ),
        None => tracing::debug!(log_path = %log_path.display(), "logging initialized"),
    }
    guard
}

fn open_log(path: &Path) -> std::io::Result<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
