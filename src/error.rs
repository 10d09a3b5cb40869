//! Error types.

use thiserror::Error;

/// A rejected [`AnnealConfig`](crate::sa::AnnealConfig).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("dimensions must be at least 1")]
    ZeroDimensions,

    #[error("bounds must be finite with lower < upper, got [{lower}, {upper}]")]
    InvalidBounds { lower: f64, upper: f64 },

    #[error("initial_temperature must be positive and finite, got {0}")]
    InvalidTemperature(f64),

    #[error("cooling_rate must be in (0, 1), got {0}")]
    InvalidCoolingRate(f64),

    #[error("max_iterations must be at least 1")]
    ZeroIterations,

    #[error("step_size must be positive and finite, got {0}")]
    InvalidStepSize(f64),
}

/// Errors raised by result consumers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// A result was requested before any run completed.
    #[error("no annealing run has completed yet; start a run first")]
    NoCompletedRun,
}
