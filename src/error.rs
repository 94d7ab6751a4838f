use thiserror::Error;

/// A configuration that cannot produce a meaningful session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} range is degenerate: min {min} >= max {max}")]
    DegenerateRange { name: &'static str, min: f64, max: f64 },

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("{name} must lie in (0, 1], got {value}")]
    OutOfUnitInterval { name: &'static str, value: f64 },

    #[error("initial {name} {value} lies outside [{min}, {max}]")]
    InitialOutOfRange { name: &'static str, value: f64, min: f64, max: f64 },
}
