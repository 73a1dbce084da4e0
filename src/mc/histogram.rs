// src/mc/histogram.rs
//! Histogram construction for simulated balances
//!
//! # Additive mode (discrete)
//!
//! Balances are integers around 100, so every distinct value gets its own
//! bin, sorted ascending. Values never observed get no bin.
//!
//! # Multiplicative mode (log-scale)
//!
//! Balances are log-binomially distributed with a heavy right tail, so the
//! range is split into 50 equal-width bins in log10 space:
//! ```text
//! logMin  = log10(min > 0 ? min : 1e-4)
//! logMax  = log10(max)
//! width   = (logMax - logMin) / 50
//! bin(v)  = clamp(floor((log10(v) - logMin) / width), 0, 49)
//! label_i = 10^(logMin + (i + ½)·width)
//! ```
//! Non-positive balances are dropped, so the counts may sum to less than the
//! number of trials. All 50 bins are emitted, empty ones included.

use crate::error::{validation::validate_non_empty, SimResult};
use crate::models::PayoffMode;
use serde::{Deserialize, Serialize};

/// Number of log-spaced bins in multiplicative mode
pub const LOG_BIN_COUNT: usize = 50;

/// Stand-in for a non-positive minimum when computing `logMin`
pub const LOG_FLOOR: f64 = 1e-4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bin {
    pub label: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Histogram {
    pub bins: Vec<Bin>,
}

impl Histogram {
    /// Build the histogram for `results` using the binning rule of `mode`
    pub fn build(results: &[f64], mode: PayoffMode) -> SimResult<Self> {
        validate_non_empty(results)?;
        let bins = match mode {
            PayoffMode::Additive => discrete_bins(results),
            PayoffMode::Multiplicative => log_scale_bins(results),
        };
        Ok(Histogram { bins })
    }

    /// Sum of all bin counts
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|b| b.count).sum()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.bins.iter().map(|b| b.label.as_str()).collect()
    }

    pub fn counts(&self) -> Vec<u64> {
        self.bins.iter().map(|b| b.count).collect()
    }
}

fn discrete_bins(results: &[f64]) -> Vec<Bin> {
    let mut sorted = results.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mut bins: Vec<(f64, u64)> = Vec::new();
    for value in sorted {
        if let Some((last, count)) = bins.last_mut() {
            if *last == value {
                *count += 1;
                continue;
            }
        }
        bins.push((value, 1));
    }

    bins.into_iter()
        .map(|(value, count)| Bin {
            label: value.to_string(),
            count,
        })
        .collect()
}

fn log_scale_bins(results: &[f64]) -> Vec<Bin> {
    let min = results.iter().copied().fold(f64::INFINITY, f64::min);
    let max = results.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let safe_min = if min > 0.0 { min } else { LOG_FLOOR };
    let log_min = safe_min.log10();
    let log_max = max.log10();
    let log_bin_size = (log_max - log_min) / LOG_BIN_COUNT as f64;

    let mut counts = vec![0u64; LOG_BIN_COUNT];
    for &value in results {
        if let Some(index) = log_bin_index(value, max, log_min, log_bin_size) {
            counts[index] += 1;
        }
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let center = 10f64.powf(log_min + (i as f64 + 0.5) * log_bin_size);
            Bin {
                label: format_bin_label(center),
                count,
            }
        })
        .collect()
}

/// Log-scale bin for `value`, or `None` when the value is dropped (≤ 0)
///
/// A zero-width range (all values equal) puts everything in bin 0. The
/// maximum always lands in the last bin, even when it has overflowed to
/// infinity.
pub fn log_bin_index(value: f64, max: f64, log_min: f64, log_bin_size: f64) -> Option<usize> {
    if value.is_nan() || value <= 0.0 {
        return None;
    }
    if log_bin_size == 0.0 || log_bin_size.is_nan() {
        return Some(0);
    }
    if value == max {
        return Some(LOG_BIN_COUNT - 1);
    }
    let raw = ((value.log10() - log_min) / log_bin_size).floor();
    Some(raw.clamp(0.0, (LOG_BIN_COUNT - 1) as f64) as usize)
}

/// Label for a log-scale bin center
///
/// Exponential below 0.01, two decimals below 100, whole number above.
pub fn format_bin_label(center: f64) -> String {
    if center < 0.01 {
        format!("{:.2e}", center)
    } else if center < 100.0 {
        format!("{:.2}", center)
    } else {
        format!("{}", center.round())
    }
}
