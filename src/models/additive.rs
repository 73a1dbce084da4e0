// src/models/additive.rs
use super::model::PayoffModel;
use crate::rng::Flip;

/// Additive game: win or lose a fixed stake on every flip
///
/// ```text
/// heads: B ← B + stake
/// tails: B ← B - stake
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Additive {
    pub start: f64,
    pub stake: f64,
}

impl Default for Additive {
    fn default() -> Self {
        Additive {
            start: 100.0,
            stake: 1.0,
        }
    }
}

impl PayoffModel for Additive {
    fn initial_balance(&self) -> f64 {
        self.start
    }

    fn settle(&self, balance: f64, flip: Flip) -> f64 {
        match flip {
            Flip::Heads => balance + self.stake,
            Flip::Tails => balance - self.stake,
        }
    }

    fn balance_after(&self, heads: u64, tails: u64) -> f64 {
        self.start + self.stake * (heads as f64 - tails as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle() {
        let game = Additive::default();
        assert_eq!(game.settle(100.0, Flip::Heads), 101.0);
        assert_eq!(game.settle(100.0, Flip::Tails), 99.0);
    }

    #[test]
    fn test_balance_after_matches_stepping() {
        let game = Additive::default();
        let mut balance = game.initial_balance();
        for flip in [Flip::Heads, Flip::Tails, Flip::Tails, Flip::Tails, Flip::Heads] {
            balance = game.settle(balance, flip);
        }
        assert_eq!(balance, game.balance_after(2, 3));
        assert_eq!(balance, 99.0);
    }
}
