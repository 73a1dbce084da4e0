// src/models/model.rs
use super::{Additive, Multiplicative};
use crate::error::SimError;
use crate::rng::Flip;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Payoff rule applied to a balance once per coin flip
pub trait PayoffModel {
    fn initial_balance(&self) -> f64;
    fn settle(&self, balance: f64, flip: Flip) -> f64;
    /// Closed-form balance after `heads` wins and `tails` losses
    fn balance_after(&self, heads: u64, tails: u64) -> f64;
}

/// Payoff model selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoffMode {
    /// Fixed unit stake won or lost per flip, starting from a 100.0 bankroll
    #[default]
    Additive,
    /// Balance scaled by 1.1 or 0.9 per flip, starting from a 1.0 unit stake
    Multiplicative,
}

impl PayoffMode {
    pub fn initial_balance(self) -> f64 {
        match self {
            PayoffMode::Additive => Additive::default().initial_balance(),
            PayoffMode::Multiplicative => Multiplicative::default().initial_balance(),
        }
    }

    pub fn settle(self, balance: f64, flip: Flip) -> f64 {
        match self {
            PayoffMode::Additive => Additive::default().settle(balance, flip),
            PayoffMode::Multiplicative => Multiplicative::default().settle(balance, flip),
        }
    }

    pub fn balance_after(self, heads: u64, tails: u64) -> f64 {
        match self {
            PayoffMode::Additive => Additive::default().balance_after(heads, tails),
            PayoffMode::Multiplicative => Multiplicative::default().balance_after(heads, tails),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PayoffMode::Additive => "additive",
            PayoffMode::Multiplicative => "multiplicative",
        }
    }
}

impl fmt::Display for PayoffMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayoffMode {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "additive" => Ok(PayoffMode::Additive),
            "multiplicative" => Ok(PayoffMode::Multiplicative),
            other => Err(SimError::InvalidConfiguration {
                field: "mode".to_string(),
                reason: format!(
                    "unknown payoff mode '{}' (expected 'additive' or 'multiplicative')",
                    other
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_balances() {
        assert_eq!(PayoffMode::Additive.initial_balance(), 100.0);
        assert_eq!(PayoffMode::Multiplicative.initial_balance(), 1.0);
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("additive".parse::<PayoffMode>().unwrap(), PayoffMode::Additive);
        assert_eq!(
            " Multiplicative ".parse::<PayoffMode>().unwrap(),
            PayoffMode::Multiplicative
        );
        assert!("geometric".parse::<PayoffMode>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for mode in [PayoffMode::Additive, PayoffMode::Multiplicative] {
            assert_eq!(mode.to_string().parse::<PayoffMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&PayoffMode::Multiplicative).unwrap();
        assert_eq!(json, "\"multiplicative\"");
    }
}
