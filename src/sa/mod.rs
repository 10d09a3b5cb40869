//! Simulated Annealing (SA) on the Rastrigin function.
//!
//! A single-solution trajectory search. Each iteration perturbs one
//! coordinate of the current point, accepts the candidate by the Metropolis
//! criterion, records the running best, and cools the temperature
//! geometrically. The loop always spends its full iteration budget.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"
//! - Rastrigin (1974), "Systems of Extremal Control"

mod acceptance;
mod config;
mod neighbor;
mod objective;
mod runner;
mod types;

pub use acceptance::{acceptance_probability, accepts};
pub use config::AnnealConfig;
pub use neighbor::{neighbor, perturb, perturbation_delta};
pub use objective::{rastrigin, RASTRIGIN_A};
pub use runner::{AnnealResult, Annealer};
pub use types::{Bounds, SearchPoint};
