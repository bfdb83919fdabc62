use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

/// Installs a stderr `fmt` subscriber. `RUST_LOG` wins over the configured
/// level. Calling it again once a subscriber exists is a no-op.
pub fn init_logging(config: &LoggingConfig) {
    if tracing::dispatcher::has_been_set() {
        return;
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let installed = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(level = %config.level, "logging initialised");
    }
}
