//! Configuration for the statistics view.
//!
//! Values come from [`StatisticsConfig::default`], the builder methods, or
//! the environment via [`StatisticsConfig::from_env`].

use tracing::warn;

/// Decimal places used when formatting percentages
pub const DEFAULT_DISPLAY_PRECISION: usize = 1;

/// Upper bound for display precision
pub const MAX_DISPLAY_PRECISION: usize = 6;

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "taskstats=info";

const PRECISION_ENV: &str = "TASKSTATS_PRECISION";
const LOG_FILTER_ENV: &str = "TASKSTATS_LOG";

/// Configuration for [`StatisticsViewModel`](crate::view_state::StatisticsViewModel).
///
/// # Example
///
/// ```ignore
/// use taskstats::config::StatisticsConfig;
///
/// let config = StatisticsConfig::default()
///     .with_display_precision(2)
///     .with_log_filter("taskstats=debug");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticsConfig {
    /// Decimal places for percentage labels (default: 1, max: 6)
    pub display_precision: usize,
    /// `tracing` filter directive used by [`init_tracing`](crate::logging::init_tracing)
    pub log_filter: String,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            display_precision: DEFAULT_DISPLAY_PRECISION,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl StatisticsConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display precision, capped at [`MAX_DISPLAY_PRECISION`].
    pub fn with_display_precision(mut self, precision: usize) -> Self {
        self.display_precision = precision.min(MAX_DISPLAY_PRECISION);
        self
    }

    /// Set the log filter directive.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Create config from `TASKSTATS_PRECISION` and `TASKSTATS_LOG`.
    ///
    /// Unset or invalid values keep their defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(PRECISION_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(precision) => config = config.with_display_precision(precision),
                Err(e) => warn!(
                    "Ignoring invalid {}={:?}: {}; using {}",
                    PRECISION_ENV, raw, e, DEFAULT_DISPLAY_PRECISION
                ),
            }
        }

        if let Ok(filter) = std::env::var(LOG_FILTER_ENV) {
            let filter = filter.trim();
            if filter.is_empty() {
                warn!("Ignoring empty {}", LOG_FILTER_ENV);
            } else {
                config = config.with_log_filter(filter);
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var(PRECISION_ENV);
        std::env::remove_var(LOG_FILTER_ENV);
    }

    #[test]
    fn test_defaults() {
        let config = StatisticsConfig::default();
        assert_eq!(config.display_precision, 1);
        assert_eq!(config.log_filter, "taskstats=info");
        assert_eq!(StatisticsConfig::new(), config);
    }

    #[test]
    fn test_builder() {
        let config = StatisticsConfig::new()
            .with_display_precision(3)
            .with_log_filter("taskstats=trace");
        assert_eq!(config.display_precision, 3);
        assert_eq!(config.log_filter, "taskstats=trace");
    }

    #[test]
    fn test_precision_is_capped() {
        let config = StatisticsConfig::new().with_display_precision(40);
        assert_eq!(config.display_precision, MAX_DISPLAY_PRECISION);
    }

    #[test]
    #[serial]
    fn test_from_env_unset() {
        clear_env();
        assert_eq!(StatisticsConfig::from_env(), StatisticsConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_values() {
        clear_env();
        std::env::set_var(PRECISION_ENV, " 2 ");
        std::env::set_var(LOG_FILTER_ENV, "taskstats=debug");

        let config = StatisticsConfig::from_env();
        assert_eq!(config.display_precision, 2);
        assert_eq!(config.log_filter, "taskstats=debug");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_values_fall_back() {
        clear_env();
        std::env::set_var(PRECISION_ENV, "lots");
        std::env::set_var(LOG_FILTER_ENV, "   ");

        assert_eq!(StatisticsConfig::from_env(), StatisticsConfig::default());
        clear_env();
    }
}
