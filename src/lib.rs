//! Simulated annealing minimizer for the Rastrigin benchmark.
//!
//! - **Objective**: the Rastrigin function, a multimodal benchmark with a
//!   global minimum of 0 at the origin.
//! - **Simulated Annealing (SA)**: single-solution local search over a
//!   15-dimensional box `[-2, 2]^15`, with one-coordinate neighbor moves,
//!   Metropolis acceptance, and geometric cooling.
//! - **Reporting**: convergence series and text summary of a finished run,
//!   for charting or display front ends.
//!
//! # Architecture
//!
//! Each run is a blocking, single-threaded call that owns all of its state,
//! including its random source. Hosts that need responsiveness run it on a
//! background thread; hosts that need cancellation pass a flag to
//! [`sa::Annealer::run_with_cancel`].
//!
//! ```
//! use rastrigin_anneal::sa::Annealer;
//!
//! let result = Annealer::new().run();
//! assert_eq!(result.convergence.len(), 1000);
//! println!("{}", result.summary());
//! ```

pub mod error;
pub mod random;
pub mod report;
pub mod sa;

pub use error::{ConfigError, ReportError};
pub use report::Session;
pub use sa::{AnnealConfig, AnnealResult, Annealer};
