//! Error types for Binary Radar

use thiserror::Error;

/// Core Binary Radar errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RadarError {
    // Contract errors
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid time component: {field} = {value}")]
    InvalidTime { field: &'static str, value: u32 },

    // Style errors
    #[error("Unknown style: {0}")]
    UnknownStyle(String),

    // Runtime errors
    #[error("Selection poller stopped")]
    PollerStopped,

    #[error("Task failed: {0}")]
    TaskFailed(String),

    #[error("Telemetry setup failed: {0}")]
    Telemetry(String),
}

/// Result type for Binary Radar operations
pub type RadarResult<T> = Result<T, RadarError>;
