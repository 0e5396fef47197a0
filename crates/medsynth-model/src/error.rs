use thiserror::Error;

/// Caller-side configuration problems detected before any generation work.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("specialist catalog is empty")]
    EmptyCatalog,

    #[error("{map} weight map is empty")]
    EmptyWeightMap { map: String },

    #[error("{map} weights sum to zero")]
    ZeroWeightSum { map: String },

    #[error("{map} weights sum to more than the largest representable number")]
    WeightSumOverflow { map: String },

    #[error("invalid {map} weight for '{key}': {value}")]
    InvalidWeight { map: String, key: String, value: f64 },

    #[error("identity pool is empty")]
    EmptyIdentityPool,

    #[error("invalid clock window: {min} is after {max}")]
    InvalidTimeWindow { min: String, max: String },

    #[error("invalid date window: {start} is after {end}")]
    InvalidDateWindow { start: String, end: String },

    #[error("invalid time of day '{value}' (expected HH:MM)")]
    InvalidTime { value: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
