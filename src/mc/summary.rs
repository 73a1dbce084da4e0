// src/mc/summary.rs
use super::histogram::Histogram;
use crate::error::{validation::validate_non_empty, SimResult};
use crate::models::PayoffMode;
use serde::{Deserialize, Serialize};

/// Scalar summary of a result set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

impl SummaryStats {
    /// Compute mean, median, min and max over `results`
    ///
    /// The median sorts a private copy with `f64::total_cmp`; `results` is
    /// left untouched. Reductions run sequentially so repeated calls are
    /// bit-identical.
    pub fn from_results(results: &[f64]) -> SimResult<Self> {
        validate_non_empty(results)?;

        let n = results.len();
        let mean = results.iter().sum::<f64>() / n as f64;
        let min = results.iter().copied().fold(f64::INFINITY, f64::min);
        let max = results.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let mut sorted = results.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let mid = n / 2;
        let median = if n % 2 != 0 {
            sorted[mid]
        } else {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        };

        Ok(SummaryStats {
            mean,
            median,
            min,
            max,
        })
    }
}

/// Scalar statistics and histogram for one run
///
/// # Errors
///
/// `SimError::EmptyResultSet` when `results` is empty.
pub fn summarize(results: &[f64], mode: PayoffMode) -> SimResult<(SummaryStats, Histogram)> {
    let stats = SummaryStats::from_results(results)?;
    let histogram = Histogram::build(results, mode)?;
    Ok((stats, histogram))
}
