use coursekit_config::{LogConfig, LogFormat};
use tracing::debug;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Builds the event filter: `RUST_LOG` if set, otherwise `LOG_LEVEL` applied
/// to the coursekit targets.
pub fn build_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "coursekit={level},coursekit_core={level},coursekit_models={level}",
            level = config.level
        ))
    })
}

/// Initialize console logging.
///
/// Logs go to stderr so that command output on stdout stays machine-readable.
///
/// # Configuration
///
/// - **Log Level**: `LOG_LEVEL` (default: "info"), overridden by `RUST_LOG`
/// - **Format**: `LOG_FORMAT=compact` (default) or `LOG_FORMAT=json`
///
/// Calling this twice is harmless; the second subscriber is not installed
/// and the existing one records a debug event instead.
pub fn init_logging(config: &LogConfig) {
    let filter = build_filter(config);

    let layer = match config.format {
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_writer(std::io::stderr)
            .with_filter(filter)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true)
            .with_writer(std::io::stderr)
            .with_filter(filter)
            .boxed(),
    };

    if let Err(e) = tracing_subscriber::registry().with(layer).try_init() {
        debug!(error = %e, "Global subscriber already installed, keeping it");
    }
}
