// src/rng.rs
//! Random Streams for Coin-Flip Simulations
//!
//! # Design Philosophy
//!
//! The simulator never reaches for an ambient random source. Every trial pulls
//! its flips from a [`CoinSource`] handed in by the caller, which gives:
//! 1. **Reproducibility**: Same seed → same results (critical for debugging/validation)
//! 2. **Parallel safety**: Each trial owns its stream, nothing is shared between threads
//! 3. **Testability**: Forced or scripted coins pin a trial to an exact outcome
//!
//! # Counter-Based RNG
//!
//! Uses a counter-based approach similar to Philox/Threefry algorithms:
//! - Each trial gets a unique counter value
//! - Deterministic mapping: (seed, counter) → random value
//! - Identical results across different thread counts

use crate::error::{SimError, SimResult};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Probability of heads for a fair coin
pub const HEADS_PROBABILITY: f64 = 0.5;

/// Outcome of a single coin flip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flip {
    Heads,
    Tails,
}

/// Injectable source of coin flips
pub trait CoinSource {
    fn flip(&mut self) -> Flip;
}

impl<C: CoinSource + ?Sized> CoinSource for &mut C {
    fn flip(&mut self) -> Flip {
        (**self).flip()
    }
}

/// Fair coin backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RngCoin<R> {
    rng: R,
}

impl<R: Rng> RngCoin<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> CoinSource for RngCoin<R> {
    fn flip(&mut self) -> Flip {
        if self.rng.gen_bool(HEADS_PROBABILITY) {
            Flip::Heads
        } else {
            Flip::Tails
        }
    }
}

/// Coin that always lands on the same face
#[derive(Debug, Clone, Copy)]
pub struct FixedCoin(pub Flip);

impl CoinSource for FixedCoin {
    fn flip(&mut self) -> Flip {
        self.0
    }
}

/// Coin that replays a fixed script of flips, wrapping around at the end
#[derive(Debug, Clone)]
pub struct ScriptedCoin {
    script: Vec<Flip>,
    position: usize,
}

impl ScriptedCoin {
    pub fn new(script: Vec<Flip>) -> SimResult<Self> {
        if script.is_empty() {
            return Err(SimError::InvalidConfiguration {
                field: "script".to_string(),
                reason: "a scripted coin needs at least one flip".to_string(),
            });
        }
        Ok(Self {
            script,
            position: 0,
        })
    }
}

impl CoinSource for ScriptedCoin {
    fn flip(&mut self) -> Flip {
        let flip = self.script[self.position];
        self.position = (self.position + 1) % self.script.len();
        flip
    }
}

/// Counter-based RNG for reproducible parallel simulations
///
/// # Algorithm
///
/// Uses the splitmix64 algorithm for fast, high-quality random numbers:
/// ```text
/// z = base_seed + counter * 0x9e3779b97f4a7c15
/// z = (z ⊕ (z >> 30)) * 0xbf58476d1ce4e5b9
/// z = (z ⊕ (z >> 27)) * 0x94d049bb133111eb
/// output = z ⊕ (z >> 31)
/// ```
///
/// The counter starts at `trial_id << 32`, so trials never overlap for fewer
/// than 2^32 draws each.
#[derive(Debug, Clone)]
pub struct CounterRng {
    base_seed: u64,
    counter: u64,
}

impl CounterRng {
    pub fn new(base_seed: u64, counter: u64) -> Self {
        Self { base_seed, counter }
    }
}

impl RngCore for CounterRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.counter = self.counter.wrapping_add(1);
        let mut z = self
            .base_seed
            .wrapping_add(self.counter.wrapping_mul(0x9e3779b97f4a7c15u64));
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9u64);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111ebu64);
        z ^ (z >> 31)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// RNG factory handing out one independent stream per trial
#[derive(Debug, Clone, Copy)]
pub struct RngFactory {
    base_seed: u64,
}

impl RngFactory {
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }

    /// Factory seeded from the operating system's entropy source
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Create a counter RNG for a specific trial
    pub fn create_counter_rng(&self, trial_id: u64) -> CounterRng {
        CounterRng::new(self.base_seed, trial_id << 32)
    }

    /// Create a standard RNG for a specific trial
    pub fn create_std_rng(&self, trial_id: u64) -> StdRng {
        StdRng::seed_from_u64(self.base_seed.wrapping_add(trial_id))
    }

    /// Fair coin for a specific trial
    pub fn create_coin(&self, trial_id: u64) -> RngCoin<CounterRng> {
        RngCoin::new(self.create_counter_rng(trial_id))
    }
}
