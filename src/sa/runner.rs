//! Annealing loop.

use super::acceptance::{acceptance_probability, accepts};
use super::config::AnnealConfig;
use super::neighbor::neighbor;
use super::objective::rastrigin;
use super::types::SearchPoint;
use crate::error::ConfigError;
use crate::random::{create_rng, fresh_rng};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument, trace};

/// Result of an annealing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealResult {
    /// The best point found.
    pub solution: SearchPoint,

    /// Objective value of `solution`.
    pub value: f64,

    /// Best value seen at or before each iteration. Non-increasing.
    pub convergence: Vec<f64>,

    /// Wall-clock duration of the run in milliseconds.
    pub runtime_ms: u64,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving candidates.
    pub improving_moves: usize,

    /// Temperature after the last cooling step.
    pub final_temperature: f64,

    /// Whether the run was stopped by its cancellation flag.
    pub cancelled: bool,
}

/// Mutable state owned by a single run.
///
/// Nothing here outlives the call that created it, so repeated runs on the
/// same [`Annealer`] are independent.
#[derive(Debug)]
struct RunState {
    current: SearchPoint,
    current_value: f64,
    best: SearchPoint,
    best_value: f64,
    temperature: f64,
    convergence: Vec<f64>,
    accepted_moves: usize,
    improving_moves: usize,
}

impl RunState {
    fn initialize<R: Rng>(config: &AnnealConfig, rng: &mut R) -> Self {
        let current = SearchPoint::random(config.dimensions, &config.bounds, rng);
        let current_value = rastrigin(current.coords());
        Self {
            best: current.clone(),
            best_value: current_value,
            current,
            current_value,
            temperature: config.initial_temperature,
            convergence: Vec::with_capacity(config.max_iterations),
            accepted_moves: 0,
            improving_moves: 0,
        }
    }

    fn step<R: Rng>(&mut self, config: &AnnealConfig, rng: &mut R) {
        let candidate = neighbor(&self.current, &config.bounds, config.step_size, rng);
        let candidate_value = rastrigin(candidate.coords());

        if candidate_value < self.current_value {
            self.improving_moves += 1;
        }

        // The draw is consumed on every iteration, even for improvements.
        let probability =
            acceptance_probability(self.current_value, candidate_value, self.temperature);
        if accepts(probability, rng.random::<f64>()) {
            self.current = candidate;
            self.current_value = candidate_value;
            self.accepted_moves += 1;
        }

        if self.current_value < self.best_value {
            self.best = self.current.clone();
            self.best_value = self.current_value;
            trace!(
                iteration = self.convergence.len(),
                best_value = self.best_value,
                "new best"
            );
        }

        self.convergence.push(self.best_value);
        self.temperature *= config.cooling_rate;
    }

    fn finish(self, runtime_ms: u64, cancelled: bool) -> AnnealResult {
        AnnealResult {
            iterations: self.convergence.len(),
            solution: self.best,
            value: self.best_value,
            convergence: self.convergence,
            runtime_ms,
            accepted_moves: self.accepted_moves,
            improving_moves: self.improving_moves,
            final_temperature: self.temperature,
            cancelled,
        }
    }
}

/// Simulated annealing minimizer for the Rastrigin function.
///
/// An `Annealer` only holds its configuration. Every run builds its own
/// state and random source, so one instance may be shared across threads.
///
/// # Examples
///
/// ```
/// use rastrigin_anneal::sa::{AnnealConfig, Annealer};
///
/// let annealer = Annealer::with_config(AnnealConfig::default().with_seed(7)).unwrap();
/// let result = annealer.run();
/// assert_eq!(result.convergence.len(), 1000);
/// assert!(result.value >= 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Annealer {
    config: AnnealConfig,
}

impl Annealer {
    /// Creates an annealer for the fixed benchmark setup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an annealer after validating `config`.
    pub fn with_config(config: AnnealConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnnealConfig {
        &self.config
    }

    /// Runs to completion with the configured seed, or a fresh random
    /// source if no seed is set.
    pub fn run(&self) -> AnnealResult {
        match self.config.seed {
            Some(seed) => self.run_with_rng(&mut create_rng(seed)),
            None => self.run_with_rng(&mut fresh_rng()),
        }
    }

    /// Runs to completion drawing from an injected random source.
    pub fn run_with_rng<R: Rng>(&self, rng: &mut R) -> AnnealResult {
        self.run_with_cancel(rng, None)
    }

    /// Runs with an optional cancellation flag, checked before each
    /// iteration. A cancelled run still returns the best point so far, with
    /// a convergence trace covering only the completed iterations.
    #[instrument(level = "debug", skip_all, fields(iterations = self.config.max_iterations))]
    pub fn run_with_cancel<R: Rng>(
        &self,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> AnnealResult {
        let config = &self.config;
        let started = Instant::now();

        let mut state = RunState::initialize(config, rng);
        debug!(
            initial_value = state.current_value,
            temperature = state.temperature,
            "annealing initialized"
        );

        let mut cancelled = false;
        for _ in 0..config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            state.step(config, rng);
        }

        let runtime_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let result = state.finish(runtime_ms, cancelled);

        info!(
            best_value = result.value,
            iterations = result.iterations,
            accepted_moves = result.accepted_moves,
            runtime_ms = result.runtime_ms,
            cancelled = result.cancelled,
            "annealing finished"
        );

        result
    }
}
