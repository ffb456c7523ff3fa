use crm_jobs_domain::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr. `RUST_LOG` wins over the configured level.
pub fn init_logging(cfg: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = if cfg.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
