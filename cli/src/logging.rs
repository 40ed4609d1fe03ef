use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Sets up logging for the `realty` binary.
///
/// Console output is compact and goes to stderr so command output on stdout
/// stays clean. A JSON copy is written to `<local data dir>/realty/logs/`,
/// rotated daily.
///
/// `RUST_LOG` overrides the default filter, e.g. `RUST_LOG=service=trace realty upload a.jpg`.
///
/// The returned guard flushes the file writer; keep it alive until exit.
pub fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("realty")
        .join("logs");

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!(
            "Warning: Failed to create log directory at {}: {}",
            log_dir.display(),
            e
        );
    }

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact();

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "realty.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_file(true)
        .with_line_number(true);

    // photo_storage logs every simulated transfer at debug
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,service=info,photo_storage=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}
