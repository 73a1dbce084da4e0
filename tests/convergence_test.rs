// tests/convergence_test.rs
use coinflip_sim::analytics::coinflip_analytic;
use coinflip_sim::mc::{simulate_seeded, EngineOptions, Sampling, SimulationConfig};
use coinflip_sim::models::PayoffMode;
use std::collections::HashMap;

// Largest gap between simulated frequencies and the exact binomial law
fn max_frequency_error(mode: PayoffMode, steps: usize, sampling: Sampling, seed: u64) -> f64 {
    let trials = 200_000;
    let cfg = SimulationConfig::new(trials, steps, mode).expect("Valid configuration");
    let options = EngineOptions {
        seed: Some(seed),
        sampling,
        parallel: true,
    };
    let results = simulate_seeded(&cfg, &options).expect("Simulation runs");

    // Balances are keyed by heads count, recovered from the payoff rule
    let mut counts: HashMap<u64, usize> = HashMap::new();
    for value in &results {
        let heads = match mode {
            PayoffMode::Additive => ((value - 100.0 + steps as f64) / 2.0).round() as u64,
            PayoffMode::Multiplicative => {
                ((value.ln() - steps as f64 * 0.9f64.ln()) / (1.1f64 / 0.9).ln()).round() as u64
            }
        };
        *counts.entry(heads).or_insert(0) += 1;
    }

    let exact = coinflip_analytic::outcome_distribution(mode, steps as u64)
        .expect("Valid step count");
    exact
        .iter()
        .enumerate()
        .map(|(h, &(_, p))| {
            let freq = *counts.get(&(h as u64)).unwrap_or(&0) as f64 / trials as f64;
            (freq - p).abs()
        })
        .fold(0.0, f64::max)
}

#[test]
fn test_per_flip_additive_converges_to_binomial() {
    let err = max_frequency_error(PayoffMode::Additive, 10, Sampling::PerFlip, 101);
    println!("Per-flip additive max frequency error: {}", err);
    assert!(err < 0.005);
}

#[test]
fn test_per_flip_multiplicative_converges_to_binomial() {
    let err = max_frequency_error(PayoffMode::Multiplicative, 12, Sampling::PerFlip, 102);
    println!("Per-flip multiplicative max frequency error: {}", err);
    assert!(err < 0.005);
}

#[test]
fn test_heads_count_converges_to_binomial() {
    for mode in [PayoffMode::Additive, PayoffMode::Multiplicative] {
        let err = max_frequency_error(mode, 10, Sampling::HeadsCount, 103);
        println!("Heads-count {} max frequency error: {}", mode, err);
        assert!(err < 0.005);
    }
}

#[test]
fn test_empirical_loss_probability() {
    let steps = 20;
    let trials = 100_000;
    let cfg = SimulationConfig::new(trials, steps, PayoffMode::Multiplicative)
        .expect("Valid configuration");
    let options = EngineOptions {
        seed: Some(104),
        ..Default::default()
    };
    let results = simulate_seeded(&cfg, &options).expect("Simulation runs");

    let losses = results.iter().filter(|&&v| v < 1.0).count() as f64 / trials as f64;
    let exact = coinflip_analytic::probability_of_loss(PayoffMode::Multiplicative, steps as u64)
        .expect("Valid step count");

    println!("Empirical P(loss) {} vs exact {}", losses, exact);
    assert!((losses - exact).abs() < 0.01);
}
