// src/math_utils.rs

/// Standard error of the sample mean, `s / √n` with the unbiased `s`
///
/// Returns 0.0 for fewer than two values.
pub fn standard_error(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n as f64 - 1.0);
    (var / n as f64).sqrt()
}

pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = std::time::Instant::now();
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_error() {
        assert_eq!(standard_error(&[5.0]), 0.0);
        // s² = 2.5 for 1..=5, SE = √(2.5 / 5)
        let se = standard_error(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!((se - 0.5f64.sqrt()).abs() < 1e-12);
    }
}
