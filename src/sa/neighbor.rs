//! Single-coordinate neighbor move.

use super::types::{Bounds, SearchPoint};
use rand::Rng;

/// Maps a uniform draw `u` in `[0, 1)` to a delta in `[-step/2, step/2)`.
pub fn perturbation_delta(u: f64, step_size: f64) -> f64 {
    (u - 0.5) * step_size
}

/// Shifts coordinate `index` of `point` by `delta`, clamped into `bounds`.
///
/// All other coordinates are copied unchanged. A coordinate pushed past a
/// bound saturates at that bound.
pub fn perturb(point: &SearchPoint, index: usize, delta: f64, bounds: &Bounds) -> SearchPoint {
    point.perturbed(index, delta, bounds)
}

/// Proposes a neighbor of `point`.
///
/// Picks one coordinate uniformly, then draws its delta from
/// `(U(0,1) - 0.5) * step_size`. Consumes exactly two values from `rng`.
pub fn neighbor<R: Rng>(
    point: &SearchPoint,
    bounds: &Bounds,
    step_size: f64,
    rng: &mut R,
) -> SearchPoint {
    let index = rng.random_range(0..point.dimensions());
    let delta = perturbation_delta(rng.random::<f64>(), step_size);
    perturb(point, index, delta, bounds)
}
