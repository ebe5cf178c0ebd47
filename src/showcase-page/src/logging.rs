//! Tracing subscriber setup.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LogConfig;
use crate::error::{PageError, PageResult};

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the configured level. Fails if a global subscriber
/// is already set.
pub fn init_logging(config: &LogConfig) -> PageResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let subscriber = tracing_subscriber::registry().with(filter);

    let result = if config.json {
        subscriber.with(fmt::layer().json()).try_init()
    } else {
        subscriber.with(fmt::layer().pretty()).try_init()
    };
    result.map_err(|err| PageError::Logging(err.to_string()))
}
