//! Metropolis acceptance criterion.

/// Probability of moving from `current` to `candidate` energy at `temperature`.
///
/// Strict improvements are always accepted. Otherwise the probability is
/// `exp((current - candidate) / temperature)`, which lies in `(0, 1]` and
/// equals 1 for equal energies. `temperature` must be positive.
pub fn acceptance_probability(current: f64, candidate: f64, temperature: f64) -> f64 {
    if candidate < current {
        return 1.0;
    }
    ((current - candidate) / temperature).exp()
}

/// Whether a move with acceptance `probability` is taken for a uniform `draw`
/// in `[0, 1)`. Ties are rejected.
pub fn accepts(probability: f64, draw: f64) -> bool {
    probability > draw
}
