use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "TRENDING_LOG";

const DEFAULT_LEVEL: &str = "warn";

/// Install the stderr subscriber
///
/// Precedence: `--log-level`, then `TRENDING_LOG`, then the config file, then `warn`.
pub fn init(cli_level: Option<&str>, config_level: Option<&str>) {
    let filter = match cli_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(config_level.unwrap_or(DEFAULT_LEVEL))),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
