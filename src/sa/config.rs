//! Annealer configuration.

use super::types::Bounds;
use crate::error::ConfigError;

/// Parameters of the Rastrigin annealing run.
///
/// The defaults are the fixed benchmark setup: 15 dimensions in `[-2, 2]`,
/// starting temperature 1000 with geometric cooling at 0.95 per iteration,
/// and a budget of 1000 iterations.
///
/// # Examples
///
/// ```
/// use rastrigin_anneal::sa::AnnealConfig;
///
/// let config = AnnealConfig::default().with_seed(42);
/// assert_eq!(config.dimensions, 15);
/// assert_eq!(config.max_iterations, 1000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Number of coordinates in a search point.
    pub dimensions: usize,

    /// Per-coordinate search domain.
    pub bounds: Bounds,

    /// Temperature at the first iteration.
    pub initial_temperature: f64,

    /// Geometric cooling factor: `T_{k+1} = cooling_rate * T_k`.
    pub cooling_rate: f64,

    /// Fixed iteration budget. There is no early stop.
    pub max_iterations: usize,

    /// Width of the neighbor delta, drawn as `(U(0,1) - 0.5) * step_size`.
    pub step_size: f64,

    /// Random seed for reproducibility. `None` draws a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            dimensions: 15,
            bounds: Bounds::default(),
            initial_temperature: 1000.0,
            cooling_rate: 0.95,
            max_iterations: 1000,
            step_size: 0.1,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_dimensions(mut self, n: usize) -> Self {
        self.dimensions = n;
        self
    }

    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.bounds = Bounds::new(lower, upper);
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_step_size(mut self, step: f64) -> Self {
        self.step_size = step;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimensions == 0 {
            return Err(ConfigError::ZeroDimensions);
        }
        let Bounds { lower, upper } = self.bounds;
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(ConfigError::InvalidBounds { lower, upper });
        }
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(ConfigError::InvalidTemperature(self.initial_temperature));
        }
        if self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 || self.cooling_rate.is_nan() {
            return Err(ConfigError::InvalidCoolingRate(self.cooling_rate));
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(ConfigError::InvalidStepSize(self.step_size));
        }
        Ok(())
    }
}
