//! Result consumers: plot series, text summary, and a latest-run holder.

use crate::error::ReportError;
use crate::sa::{AnnealResult, Annealer};
use std::fmt::Write as _;

impl AnnealResult {
    /// `(iteration, best value)` pairs, ready to draw as a line series.
    pub fn convergence_series(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.convergence.iter().copied().enumerate()
    }

    /// Human-readable summary of the best point, its value, and the runtime.
    pub fn summary(&self) -> String {
        let mut out = String::from("Best Solution Found:\n");
        for x in self.solution.coords() {
            let _ = write!(out, "{x:.4} ");
        }
        let _ = write!(out, "\n\nFinal Value: {:.4}", self.value);
        let _ = write!(out, "\n\nRuntime: {} ms", self.runtime_ms);
        out
    }
}

/// Holds an annealer and the result of its most recent completed run.
///
/// Asking for a result before any run has completed is reported as
/// [`ReportError::NoCompletedRun`] and never triggers a run.
#[derive(Debug, Default)]
pub struct Session {
    annealer: Annealer,
    latest: Option<AnnealResult>,
}

impl Session {
    pub fn new(annealer: Annealer) -> Self {
        Self {
            annealer,
            latest: None,
        }
    }

    /// Runs the annealer and keeps the result, replacing any earlier one.
    pub fn start(&mut self) -> &AnnealResult {
        self.latest.insert(self.annealer.run())
    }

    pub fn latest(&self) -> Result<&AnnealResult, ReportError> {
        self.latest.as_ref().ok_or(ReportError::NoCompletedRun)
    }

    pub fn summary(&self) -> Result<String, ReportError> {
        self.latest().map(AnnealResult::summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sa::{AnnealConfig, Bounds, SearchPoint};

    fn fixed_result() -> AnnealResult {
        AnnealResult {
            solution: SearchPoint::new(vec![0.5, -1.25, 0.0], &Bounds::default()),
            value: 3.14159,
            convergence: vec![9.0, 5.0, 5.0, 3.14159],
            runtime_ms: 12,
            iterations: 4,
            accepted_moves: 3,
            improving_moves: 2,
            final_temperature: 1.0,
            cancelled: false,
        }
    }

    #[test]
    fn test_summary_format() {
        let text = fixed_result().summary();
        assert_eq!(
            text,
            "Best Solution Found:\n0.5000 -1.2500 0.0000 \n\nFinal Value: 3.1416\n\nRuntime: 12 ms"
        );
    }

    #[test]
    fn test_convergence_series_indices() {
        let result = fixed_result();
        let series: Vec<(usize, f64)> = result.convergence_series().collect();
        assert_eq!(series, vec![(0, 9.0), (1, 5.0), (2, 5.0), (3, 3.14159)]);
    }

    #[test]
    fn test_session_requires_completed_run() {
        let session = Session::default();
        assert_eq!(session.latest().unwrap_err(), ReportError::NoCompletedRun);
        assert_eq!(session.summary().unwrap_err(), ReportError::NoCompletedRun);
    }

    #[test]
    fn test_session_keeps_latest() {
        let annealer = Annealer::with_config(AnnealConfig::default().with_seed(42)).unwrap();
        let mut session = Session::new(annealer);

        let value = session.start().value;
        assert_eq!(session.latest().unwrap().value, value);

        let summary = session.summary().unwrap();
        assert!(summary.starts_with("Best Solution Found:\n"));
        assert!(summary.contains("Final Value: "));
        assert!(summary.ends_with(" ms"));
    }
}
