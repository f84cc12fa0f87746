//! Tracing subscriber setup

use radar_core::{RadarError, RadarResult};
use tracing_subscriber::EnvFilter;

/// Logging configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Filter used when `RUST_LOG` is unset
    pub default_filter: String,
    /// Emit JSON lines instead of human-readable text
    pub json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        TelemetryConfig {
            default_filter: "info".to_string(),
            json: false,
        }
    }
}

impl TelemetryConfig {
    /// Per-tick selection logging
    pub fn verbose() -> Self {
        TelemetryConfig {
            default_filter: "info,radar_grid=debug,radar_runtime=debug".to_string(),
            json: false,
        }
    }
}

/// Build the filter, letting `RUST_LOG` override the configured default
pub fn env_filter(config: &TelemetryConfig) -> RadarResult<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.default_filter))
        .map_err(|e| RadarError::Telemetry(e.to_string()))
}

/// Install the global tracing subscriber. Fails if one is already set.
pub fn init_tracing(config: &TelemetryConfig) -> RadarResult<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter(config)?);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| RadarError::Telemetry(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(TelemetryConfig::default().default_filter).is_ok());
        assert!(EnvFilter::try_new(TelemetryConfig::verbose().default_filter).is_ok());
    }

    #[test]
    fn test_second_init_fails() {
        let config = TelemetryConfig::default();
        let _ = init_tracing(&config);
        assert!(matches!(
            init_tracing(&config),
            Err(RadarError::Telemetry(_))
        ));
    }
}
