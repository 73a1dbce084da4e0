// src/mc/simulator.rs
//! Monte Carlo engine for the coin-flip game
//!
//! # Process
//!
//! Each trial is a random walk of `steps` fair coin flips applied to a
//! starting balance:
//! ```text
//! Additive:       B₀ = 100,  B_{k+1} = B_k ± 1
//! Multiplicative: B₀ = 1,    B_{k+1} = B_k × {1.1, 0.9}
//! ```
//!
//! The final balance only depends on the number of heads `h`, so a trial can
//! also be sampled in one draw with `h ~ Binomial(steps, 0.5)`:
//! ```text
//! Additive:       B = 100 + h - (steps - h)
//! Multiplicative: B = 1.1^h × 0.9^(steps - h)
//! ```
//!
//! # Parallelism
//!
//! Trials share no state. Seeded runs give every trial its own counter-based
//! stream keyed by the trial index, so the parallel and sequential paths
//! return the same `ResultSet`.

use crate::error::{validation::*, SimError, SimResult};
use crate::models::PayoffMode;
use crate::rng::{CoinSource, RngFactory, HEADS_PROBABILITY};
use rand_distr::{Binomial, Distribution};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;
use tracing::debug;

/// Final balances of every trial, in trial order
pub type ResultSet = Vec<f64>;

/// Validated simulation parameters
///
/// Fields are private so a constructed config is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimulationConfig {
    trials: usize,
    steps: usize,
    mode: PayoffMode,
}

impl SimulationConfig {
    pub fn new(trials: usize, steps: usize, mode: PayoffMode) -> SimResult<Self> {
        validate_trials(trials)?;
        validate_steps(steps)?;
        Ok(Self {
            trials,
            steps,
            mode,
        })
    }

    /// Build from signed input, reporting negative values as given
    pub fn from_signed(trials: i64, steps: i64, mode: PayoffMode) -> SimResult<Self> {
        let trials = validate_count("trials", trials)?;
        let steps = validate_count("steps", steps)?;
        Self::new(trials, steps, mode)
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn mode(&self) -> PayoffMode {
        self.mode
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            trials: 10_000,
            steps: 100,
            mode: PayoffMode::Additive,
        }
    }
}

/// How a trial's flips are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sampling {
    /// One coin flip per step
    #[default]
    PerFlip,
    /// A single Binomial(steps, 0.5) draw of the heads count
    HeadsCount,
}

impl fmt::Display for Sampling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sampling::PerFlip => f.write_str("per-flip"),
            Sampling::HeadsCount => f.write_str("heads-count"),
        }
    }
}

impl FromStr for Sampling {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "per-flip" | "perflip" | "flip" => Ok(Sampling::PerFlip),
            "heads-count" | "headscount" | "binomial" => Ok(Sampling::HeadsCount),
            other => Err(SimError::InvalidConfiguration {
                field: "sampling".to_string(),
                reason: format!(
                    "unknown sampling '{}' (expected 'per-flip' or 'heads-count')",
                    other
                ),
            }),
        }
    }
}

/// Engine knobs that do not change the distribution being simulated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Base seed; `None` draws one from OS entropy
    pub seed: Option<u64>,
    pub sampling: Sampling,
    pub parallel: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            seed: None,
            sampling: Sampling::PerFlip,
            parallel: true,
        }
    }
}

impl EngineOptions {
    /// Fix the base seed now, drawing it from OS entropy when unset
    ///
    /// Running twice with the returned options replays the same trials.
    pub fn resolve_seed(self) -> Self {
        EngineOptions {
            seed: Some(self.seed.unwrap_or_else(rand::random)),
            ..self
        }
    }
}

/// Play one trial of `steps` flips and return the final balance
///
/// Performs no validation: `steps == 0` returns the starting balance.
pub fn play_trial<C: CoinSource + ?Sized>(mode: PayoffMode, steps: usize, coin: &mut C) -> f64 {
    let mut balance = mode.initial_balance();
    for _ in 0..steps {
        balance = mode.settle(balance, coin.flip());
    }
    balance
}

/// Run every trial sequentially against a caller-supplied coin
///
/// Deterministic for a deterministic `coin`: trial `i` consumes flips
/// `i * steps .. (i + 1) * steps` of the stream.
pub fn simulate_with<C: CoinSource + ?Sized>(config: &SimulationConfig, coin: &mut C) -> ResultSet {
    (0..config.trials)
        .map(|_| play_trial(config.mode, config.steps, &mut *coin))
        .collect()
}

/// Run the simulation with default engine options (entropy seed, parallel)
pub fn simulate(config: &SimulationConfig) -> SimResult<ResultSet> {
    simulate_seeded(config, &EngineOptions::default())
}

/// Run the simulation with one independent random stream per trial
///
/// # Errors
///
/// Returns `SimError::RandomGeneration` if the binomial sampler cannot be
/// built for the requested step count.
pub fn simulate_seeded(config: &SimulationConfig, options: &EngineOptions) -> SimResult<ResultSet> {
    let factory = options
        .seed
        .map(RngFactory::new)
        .unwrap_or_else(RngFactory::from_entropy);
    let n = config.trials;
    let steps = config.steps;
    let mode = config.mode;
    let started = Instant::now();

    let results: ResultSet = match options.sampling {
        Sampling::PerFlip => {
            let run = |i: usize| {
                let mut coin = factory.create_coin(i as u64);
                play_trial(mode, steps, &mut coin)
            };
            if options.parallel {
                (0..n).into_par_iter().map(run).collect()
            } else {
                (0..n).map(run).collect()
            }
        }
        Sampling::HeadsCount => {
            let binomial = Binomial::new(steps as u64, HEADS_PROBABILITY).map_err(|e| {
                SimError::RandomGeneration {
                    reason: format!("binomial sampler for {} steps: {:?}", steps, e),
                }
            })?;
            let run = |i: usize| {
                let mut rng = factory.create_counter_rng(i as u64);
                let heads = binomial.sample(&mut rng);
                mode.balance_after(heads, steps as u64 - heads)
            };
            if options.parallel {
                (0..n).into_par_iter().map(run).collect()
            } else {
                (0..n).map(run).collect()
            }
        }
    };

    debug!(
        trials = n,
        steps,
        mode = %mode,
        sampling = %options.sampling,
        parallel = options.parallel,
        seed = factory.base_seed(),
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        "simulation finished"
    );

    Ok(results)
}
