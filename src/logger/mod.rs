//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;

use crate::config::LoggerConfig;

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set, so operators can
/// raise verbosity without touching configuration files.
pub fn init(config: &LoggerConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| anyhow::anyhow!("invalid log level '{}': {}", config.level, e))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.with_ansi(config.colored).try_init()
    };

    result.map_err(|e| anyhow::anyhow!("failed to initialize logger: {e}"))
}
