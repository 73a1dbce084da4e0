// src/analytics/coinflip_analytic.rs
//! Closed-form results for the coin-flip game
//!
//! # Mathematical Foundation
//!
//! After `n` fair flips the number of heads is `H ~ Binomial(n, ½)` and the
//! final balance is a deterministic function of `H`:
//! ```text
//! Additive:       B = 100 + 2H - n
//! Multiplicative: B = 1.1^H · 0.9^(n-H)
//! ```
//!
//! The two games share an ensemble mean (the start value) but not a typical
//! outcome. In the multiplicative game the typical trial decays like
//! `(1.1 · 0.9)^(n/2) = 0.99^(n/2)` while a few lucky trials carry the mean.

use crate::error::{SimError, SimResult};
use crate::models::PayoffMode;
use crate::rng::HEADS_PROBABILITY;
use statrs::distribution::{Binomial, Discrete};

fn heads_distribution(steps: u64) -> SimResult<Binomial> {
    Binomial::new(HEADS_PROBABILITY, steps).map_err(|e| SimError::InvalidConfiguration {
        field: "steps".to_string(),
        reason: format!("binomial distribution unavailable: {}", e),
    })
}

/// Ensemble mean of the final balance
///
/// # Formula
/// ```text
/// Additive:       E[B] = 100
/// Multiplicative: E[B] = (½·1.1 + ½·0.9)^n = 1
/// ```
pub fn expected_mean(mode: PayoffMode, steps: u64) -> f64 {
    match mode {
        PayoffMode::Additive => mode.initial_balance(),
        PayoffMode::Multiplicative => {
            let factor = HEADS_PROBABILITY * 1.1 + (1.0 - HEADS_PROBABILITY) * 0.9;
            mode.initial_balance() * factor.powf(steps as f64)
        }
    }
}

/// Variance of the final balance
///
/// # Formula
/// ```text
/// Additive:       Var[B] = n
/// Multiplicative: Var[B] = ((1.1² + 0.9²) / 2)^n - 1
/// ```
pub fn variance(mode: PayoffMode, steps: u64) -> f64 {
    match mode {
        PayoffMode::Additive => steps as f64,
        PayoffMode::Multiplicative => {
            let second_moment = (HEADS_PROBABILITY * 1.1 * 1.1
                + (1.0 - HEADS_PROBABILITY) * 0.9 * 0.9)
                .powf(steps as f64);
            second_moment - expected_mean(mode, steps).powi(2)
        }
    }
}

/// Balance of a trial that wins exactly half its flips
///
/// For the multiplicative game this is the time-average outcome
/// `0.99^(n/2)`, which sits below the start for any `n > 0`.
pub fn typical_balance(mode: PayoffMode, steps: u64) -> f64 {
    match mode {
        PayoffMode::Additive => mode.initial_balance(),
        PayoffMode::Multiplicative => mode.initial_balance() * (1.1f64 * 0.9).powf(steps as f64 / 2.0),
    }
}

/// Exact distribution of the final balance as `(balance, probability)` pairs
///
/// Pairs are ordered by ascending balance (both games are increasing in the
/// number of heads).
pub fn outcome_distribution(mode: PayoffMode, steps: u64) -> SimResult<Vec<(f64, f64)>> {
    let heads = heads_distribution(steps)?;
    Ok((0..=steps)
        .map(|h| (mode.balance_after(h, steps - h), heads.pmf(h)))
        .collect())
}

/// Probability that a trial ends below its starting balance
pub fn probability_of_loss(mode: PayoffMode, steps: u64) -> SimResult<f64> {
    let start = mode.initial_balance();
    Ok(outcome_distribution(mode, steps)?
        .into_iter()
        .filter(|&(balance, _)| balance < start)
        .map(|(_, p)| p)
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_means() {
        assert_eq!(expected_mean(PayoffMode::Additive, 100), 100.0);
        assert!((expected_mean(PayoffMode::Multiplicative, 100) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_variance() {
        assert_eq!(variance(PayoffMode::Additive, 64), 64.0);
        // 1.01^1 - 1
        assert!((variance(PayoffMode::Multiplicative, 1) - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_typical_balance_decays() {
        let typical = typical_balance(PayoffMode::Multiplicative, 100);
        assert!((typical - 0.99f64.powi(50)).abs() < 1e-12);
        assert!(typical < 1.0);
    }

    #[test]
    fn test_outcome_distribution_sums_to_one() {
        for mode in [PayoffMode::Additive, PayoffMode::Multiplicative] {
            let dist = outcome_distribution(mode, 20).unwrap();
            assert_eq!(dist.len(), 21);
            let total: f64 = dist.iter().map(|&(_, p)| p).sum();
            assert!((total - 1.0).abs() < 1e-12);
            assert!(dist.windows(2).all(|w| w[0].0 < w[1].0));
        }
    }

    #[test]
    fn test_outcome_distribution_mean_matches() {
        let dist = outcome_distribution(PayoffMode::Multiplicative, 30).unwrap();
        let mean: f64 = dist.iter().map(|&(b, p)| b * p).sum();
        assert!((mean - expected_mean(PayoffMode::Multiplicative, 30)).abs() < 1e-10);
    }

    #[test]
    fn test_probability_of_loss() {
        // Two flips additive: lose only on TT
        let p = probability_of_loss(PayoffMode::Additive, 2).unwrap();
        assert!((p - 0.25).abs() < 1e-12);

        // Two flips multiplicative: HT gives 0.99 < 1, so loss on HT, TH, TT
        let p = probability_of_loss(PayoffMode::Multiplicative, 2).unwrap();
        assert!((p - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_long_multiplicative_outcomes_are_never_nan() {
        let steps = 20_000;
        let dist = outcome_distribution(PayoffMode::Multiplicative, steps).unwrap();
        assert!(dist.iter().all(|&(b, _)| !b.is_nan() && b >= 0.0));

        let (even, _) = dist[10_000];
        assert!((even - typical_balance(PayoffMode::Multiplicative, steps)).abs() / even < 1e-9);

        // Break-even needs about 52.5% heads, 7 standard deviations out
        let p = probability_of_loss(PayoffMode::Multiplicative, steps).unwrap();
        assert!(p > 0.999 && p <= 1.0 + 1e-9, "P(loss) = {}", p);
    }
}
