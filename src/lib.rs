//! # coinflip-sim: Monte Carlo for Coin-Flip Betting Games
//!
//! A Rust library that simulates many independent trials of a fair coin-flip
//! game and summarizes where the final balances end up.
//!
//! ## Key Features
//!
//! - **Two payoff models**: additive (±1 on a 100 bankroll) and multiplicative (×1.1 / ×0.9 on a unit stake)
//! - **Injectable randomness**: forced, scripted or seeded coins for exact, reproducible runs
//! - **High Performance**: Parallel trials with Rayon, identical results to the sequential path
//! - **Display-ready summaries**: mean, median, min, max and a mode-specific histogram
//! - **Closed forms**: exact binomial outcome distribution for checking the engine
//!
//! ## Quick Start
//!
//! ```rust
//! use coinflip_sim::mc::{simulate_seeded, summarize, EngineOptions, SimulationConfig};
//! use coinflip_sim::models::PayoffMode;
//!
//! let config = SimulationConfig::new(10_000, 100, PayoffMode::Multiplicative)
//!     .expect("Valid configuration");
//! let options = EngineOptions {
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let results = simulate_seeded(&config, &options).expect("Simulation runs");
//! let (stats, histogram) = summarize(&results, config.mode()).expect("Non-empty results");
//! println!("mean {:.4}, median {:.4}", stats.mean, stats.median);
//! assert_eq!(histogram.bins.len(), 50);
//! ```
//!
//! ## Why two games
//!
//! Both games have the same expected value per flip, but the multiplicative
//! one is not ergodic: its ensemble mean stays at 1.0 while the median trial
//! shrinks like 0.99^(n/2). The histograms make that gap visible.

pub mod analytics;
pub mod config;
pub mod error;
pub mod math_utils;
pub mod mc;
pub mod models;
pub mod output;
pub mod rng;

pub use error::{SimError, SimResult};
pub use mc::{simulate, summarize, Histogram, ResultSet, SimulationConfig, SummaryStats};
pub use models::PayoffMode;
