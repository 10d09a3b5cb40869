//! Rastrigin objective.

use std::f64::consts::PI;

/// Amplitude of the cosine modulation.
pub const RASTRIGIN_A: f64 = 10.0;

/// Evaluates `A*n + Σ (x_i² - A*cos(2π x_i))`.
///
/// Global minimum 0 at the origin; lower is better. The constant `A*n` is
/// folded into each term as `A*(1 - cos)`, so every term is non-negative
/// and the sum never rounds below zero.
pub fn rastrigin(x: &[f64]) -> f64 {
    x.iter()
        .map(|&xi| xi * xi + RASTRIGIN_A * (1.0 - (2.0 * PI * xi).cos()))
        .sum()
}
