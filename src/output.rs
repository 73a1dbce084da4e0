// src/output.rs
use crate::error::SimResult;
use crate::mc::histogram::Histogram;
use crate::mc::simulator::{Sampling, SimulationConfig};
use crate::mc::summary::SummaryStats;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Everything a presentation layer needs from one run
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub config: SimulationConfig,
    pub seed: Option<u64>,
    pub sampling: Sampling,
    pub stats: SummaryStats,
    pub histogram: Histogram,
    pub generated_at: DateTime<Utc>,
}

/// Dollar-formatted balance: exponential for tiny non-zero values, two
/// decimals otherwise
pub fn format_balance(value: f64) -> String {
    if value != 0.0 && value.abs() < 0.01 {
        format!("${:.2e}", value)
    } else {
        format!("${:.2}", value)
    }
}

pub fn write_results_to_csv(path: &Path, results: &[f64]) -> SimResult<()> {
    let mut file = BufWriter::new(File::create(path)?);
    writeln!(file, "trial,balance")?;
    for (i, balance) in results.iter().enumerate() {
        writeln!(file, "{},{}", i, balance)?;
    }
    file.flush()?;
    Ok(())
}

pub fn write_histogram_to_csv(path: &Path, histogram: &Histogram) -> SimResult<()> {
    let mut file = BufWriter::new(File::create(path)?);
    writeln!(file, "label,count")?;
    for bin in &histogram.bins {
        writeln!(file, "{},{}", bin.label, bin.count)?;
    }
    file.flush()?;
    Ok(())
}

pub fn write_report_json(path: &Path, report: &SimulationReport) -> SimResult<()> {
    let mut file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut file, report)?;
    file.flush()?;
    Ok(())
}

/// Horizontal text bar chart, bars scaled so the largest bin spans `width`
pub fn render_histogram(histogram: &Histogram, width: usize) -> String {
    let label_width = histogram
        .bins
        .iter()
        .map(|b| b.label.len())
        .max()
        .unwrap_or(0);
    let max_count = histogram.bins.iter().map(|b| b.count).max().unwrap_or(0);

    let mut out = String::new();
    for bin in &histogram.bins {
        let bar = if max_count == 0 {
            0
        } else {
            (bin.count as f64 / max_count as f64 * width as f64).round() as usize
        };
        out.push_str(&format!(
            "{:>lw$} | {} {}\n",
            bin.label,
            "#".repeat(bar),
            bin.count,
            lw = label_width
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mc::histogram::Bin;

    #[test]
    fn test_format_balance() {
        assert_eq!(format_balance(100.0), "$100.00");
        assert_eq!(format_balance(0.5), "$0.50");
        assert_eq!(format_balance(0.0), "$0.00");
        assert_eq!(format_balance(0.001234), "$1.23e-3");
        assert_eq!(format_balance(-0.004), "$-4.00e-3");
    }

    #[test]
    fn test_render_histogram_scales_bars() {
        let histogram = Histogram {
            bins: vec![
                Bin {
                    label: "98".to_string(),
                    count: 1,
                },
                Bin {
                    label: "100".to_string(),
                    count: 4,
                },
            ],
        };
        let text = render_histogram(&histogram, 8);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], " 98 | ## 1");
        assert_eq!(lines[1], "100 | ######## 4");
    }

    #[test]
    fn test_render_empty_counts() {
        let histogram = Histogram {
            bins: vec![Bin {
                label: "1.00".to_string(),
                count: 0,
            }],
        };
        assert_eq!(render_histogram(&histogram, 10), "1.00 |  0\n");
    }
}
