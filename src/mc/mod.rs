// src/mc/mod.rs
pub mod histogram;
pub mod simulator;
pub mod summary;

pub use histogram::{Bin, Histogram};
pub use simulator::{
    play_trial, simulate, simulate_seeded, simulate_with, EngineOptions, ResultSet, Sampling,
    SimulationConfig,
};
pub use summary::{summarize, SummaryStats};
