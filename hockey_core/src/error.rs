use thiserror::Error;

/// Errors raised while loading or validating a [`Config`](crate::Config)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Malformed config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config field '{field}' must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("Config field '{field}' must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("Config field '{field}' must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("Match duration must be at least one second")]
    ZeroDuration,

    #[error("{what} does not fit inside the {width}x{height} arena")]
    DoesNotFit {
        what: &'static str,
        width: f32,
        height: f32,
    },
}
