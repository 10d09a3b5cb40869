//! End-to-end runs of the fixed benchmark setup.

use rastrigin_anneal::random::create_rng;
use rastrigin_anneal::sa::{rastrigin, AnnealConfig, Annealer, Bounds};
use std::sync::Arc;
use std::thread;

#[test]
fn default_run_completes_full_budget() {
    let annealer = Annealer::new();
    let config = annealer.config();
    assert_eq!(config.dimensions, 15);
    assert_eq!(config.bounds, Bounds::new(-2.0, 2.0));
    assert_eq!(config.initial_temperature, 1000.0);
    assert_eq!(config.cooling_rate, 0.95);
    assert_eq!(config.max_iterations, 1000);

    let result = annealer.run();

    assert_eq!(result.convergence.len(), 1000);
    assert_eq!(result.solution.dimensions(), 15);
    assert!(result.solution.is_within(&config.bounds));
    assert!(result.value >= 0.0);
    assert_eq!(result.value, rastrigin(result.solution.coords()));
    assert!(result.value <= result.convergence[0]);
    assert!(result
        .convergence
        .windows(2)
        .all(|w| w[0] >= w[1]));
}

#[test]
fn fixed_seed_reproduces_exact_output() {
    let config = AnnealConfig::default().with_seed(0xC0FFEE);
    let a = Annealer::with_config(config.clone()).unwrap().run();
    let b = Annealer::with_config(config).unwrap().run();

    assert_eq!(a.solution, b.solution);
    assert_eq!(a.value.to_bits(), b.value.to_bits());
    assert_eq!(a.convergence, b.convergence);
}

#[test]
fn concurrent_runs_share_one_annealer() {
    let annealer = Arc::new(Annealer::new());

    let handles: Vec<_> = (0..4u64)
        .map(|seed| {
            let annealer = Arc::clone(&annealer);
            thread::spawn(move || annealer.run_with_rng(&mut create_rng(seed)))
        })
        .collect();

    for (seed, handle) in handles.into_iter().enumerate() {
        let threaded = handle.join().unwrap();
        let serial = annealer.run_with_rng(&mut create_rng(seed as u64));
        assert_eq!(threaded.convergence, serial.convergence);
    }
}

#[cfg(feature = "serde")]
#[test]
fn result_serializes_for_front_ends() {
    let result = Annealer::with_config(AnnealConfig::default().with_seed(1))
        .unwrap()
        .run();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["solution"].as_array().unwrap().len(), 15);
    assert_eq!(json["convergence"].as_array().unwrap().len(), 1000);
    assert!(json["runtime_ms"].is_u64());
}
