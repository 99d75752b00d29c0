use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var holding an `EnvFilter` directive; wins over the configured filter.
pub const LOG_FILTER_ENV: &str = "SDUI_LOG";

/// Env var holding a file path; when set, logs go there instead of stderr.
pub const LOG_FILE_ENV: &str = "SDUI_LOG_FILE";

/// Initialize tracing.
///
/// Filter precedence: `SDUI_LOG`, then `default_filter`, then `info`.
/// Output goes to stderr, since stdout carries rendered screens, or to the
/// file named by `SDUI_LOG_FILE` with ANSI colors off.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let timer = fmt::time::UtcTime::rfc_3339();

    if let Ok(log_path) = std::env::var(LOG_FILE_ENV) {
        match std::fs::File::create(&log_path) {
            Ok(file) => {
                let file_layer = fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_level(true)
                    .with_timer(timer);
                tracing_subscriber::registry()
                    .with(filter)
                    .with(file_layer)
                    .init();
                return;
            }
            Err(err) => {
                eprintln!("Warning: Failed to create log file {}: {}", log_path, err);
            }
        }
    }

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(timer);
    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
