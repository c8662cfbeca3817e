//! Tracing subscriber setup for hosts that do not install their own.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::StatisticsConfig;

/// Install a global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `config.log_filter`. Returns false if a
/// global subscriber was already installed, in which case nothing changes.
pub fn init_tracing(config: &StatisticsConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        let config = StatisticsConfig::default();
        let _ = init_tracing(&config);
        assert!(!init_tracing(&config));
    }
}
