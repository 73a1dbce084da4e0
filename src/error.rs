// src/error.rs
use thiserror::Error;

/// Custom error types for the coinflip-sim library
#[derive(Debug, Error)]
pub enum SimError {
    /// Invalid parameter values (non-positive trial or step counts)
    #[error("Invalid parameter '{parameter}' = {value}: {constraint}")]
    InvalidParameter {
        parameter: String,
        value: i64,
        constraint: String,
    },

    /// Summary requested over zero trials
    #[error("Cannot summarize an empty result set")]
    EmptyResultSet,

    /// Unparseable or unknown configuration input
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },

    /// Sampler construction failure
    #[error("Random number generation error: {reason}")]
    RandomGeneration { reason: String },

    /// Report output failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for coinflip-sim operations
pub type SimResult<T> = Result<T, SimError>;

/// Validation utilities
pub mod validation {
    use super::{SimError, SimResult};

    /// Validate that a count is strictly positive and return it as `usize`
    pub fn validate_count(name: &str, value: i64) -> SimResult<usize> {
        if value <= 0 {
            return Err(SimError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            });
        }
        usize::try_from(value).map_err(|_| SimError::InvalidParameter {
            parameter: name.to_string(),
            value,
            constraint: "exceeds the platform's addressable range".to_string(),
        })
    }

    /// Validate trial count
    pub fn validate_trials(trials: usize) -> SimResult<()> {
        if trials == 0 {
            Err(SimError::InvalidParameter {
                parameter: "trials".to_string(),
                value: 0,
                constraint: "must be greater than 0".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate steps (coin flips) per trial
    pub fn validate_steps(steps: usize) -> SimResult<()> {
        if steps == 0 {
            Err(SimError::InvalidParameter {
                parameter: "steps".to_string(),
                value: 0,
                constraint: "must be greater than 0".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Reject an empty slice before any reduction runs over it
    pub fn validate_non_empty(results: &[f64]) -> SimResult<()> {
        if results.is_empty() {
            Err(SimError::EmptyResultSet)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_count() {
        assert_eq!(validate_count("trials", 10).unwrap(), 10);
        assert!(validate_count("trials", 0).is_err());
        assert!(validate_count("trials", -5).is_err());
    }

    #[test]
    fn test_validate_trials_and_steps() {
        assert!(validate_trials(1).is_ok());
        assert!(validate_trials(0).is_err());
        assert!(validate_steps(100).is_ok());
        assert!(matches!(
            validate_steps(0),
            Err(SimError::InvalidParameter { ref parameter, .. }) if parameter == "steps"
        ));
    }

    #[test]
    fn test_validate_non_empty() {
        assert!(validate_non_empty(&[1.0]).is_ok());
        assert!(matches!(validate_non_empty(&[]), Err(SimError::EmptyResultSet)));
    }

    #[test]
    fn test_error_display() {
        let error = SimError::InvalidParameter {
            parameter: "trials".to_string(),
            value: -3,
            constraint: "must be positive".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("trials"));
        assert!(display.contains("-3"));
        assert!(display.contains("positive"));
    }

    #[test]
    fn test_configuration_error_display() {
        let error = SimError::InvalidConfiguration {
            field: "mode".to_string(),
            reason: "unknown payoff mode 'exotic'".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("mode"));
        assert!(display.contains("exotic"));
    }
}
