// src/config.rs
//! Run configuration for the `coinflip` front end
//!
//! Values are layered: built-in defaults, then `COINFLIP_*` environment
//! variables, then command-line flags. Counts are kept signed until
//! [`RunConfig::simulation`] so a negative input is reported as given.

use crate::error::{SimError, SimResult};
use crate::mc::simulator::{EngineOptions, Sampling, SimulationConfig};
use crate::models::PayoffMode;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_TRIALS: &str = "COINFLIP_TRIALS";
pub const ENV_STEPS: &str = "COINFLIP_STEPS";
pub const ENV_MODE: &str = "COINFLIP_MODE";
pub const ENV_SEED: &str = "COINFLIP_SEED";
pub const ENV_SAMPLING: &str = "COINFLIP_SAMPLING";
pub const ENV_PARALLEL: &str = "COINFLIP_PARALLEL";

pub const USAGE: &str = "\
Usage: coinflip [OPTIONS]

Options:
  --trials <N>            number of independent trials (default 10000)
  --steps <N>             coin flips per trial (default 100)
  --mode <MODE>           additive | multiplicative (default additive)
  --seed <N>              base seed for reproducible runs
  --sampling <S>          per-flip | heads-count (default per-flip)
  --sequential            run trials on the calling thread
  --csv <PATH>            write every final balance to PATH
  --histogram-csv <PATH>  write histogram bins to PATH
  --json <PATH>           write the full report as JSON to PATH
  -h, --help              print this message

Environment:
  COINFLIP_TRIALS, COINFLIP_STEPS, COINFLIP_MODE, COINFLIP_SEED,
  COINFLIP_SAMPLING, COINFLIP_PARALLEL (true/false)
  RUST_LOG, LOG_FORMAT (json/text)";

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub trials: i64,
    pub steps: i64,
    pub mode: PayoffMode,
    pub seed: Option<u64>,
    pub sampling: Sampling,
    pub parallel: bool,
    pub csv_path: Option<PathBuf>,
    pub histogram_csv_path: Option<PathBuf>,
    pub json_path: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        let sim = SimulationConfig::default();
        RunConfig {
            trials: sim.trials() as i64,
            steps: sim.steps() as i64,
            mode: sim.mode(),
            seed: None,
            sampling: Sampling::default(),
            parallel: true,
            csv_path: None,
            histogram_csv_path: None,
            json_path: None,
        }
    }
}

impl RunConfig {
    /// Defaults overridden by `COINFLIP_*` environment variables
    pub fn from_env() -> SimResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    pub fn from_lookup<F>(lookup: F) -> SimResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = RunConfig::default();
        if let Some(raw) = lookup(ENV_TRIALS) {
            config.trials = parse_field(ENV_TRIALS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_STEPS) {
            config.steps = parse_field(ENV_STEPS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_MODE) {
            config.mode = raw.parse()?;
        }
        if let Some(raw) = lookup(ENV_SEED) {
            config.seed = Some(parse_field(ENV_SEED, &raw)?);
        }
        if let Some(raw) = lookup(ENV_SAMPLING) {
            config.sampling = raw.parse()?;
        }
        if let Some(raw) = lookup(ENV_PARALLEL) {
            config.parallel = parse_bool(ENV_PARALLEL, &raw)?;
        }
        Ok(config)
    }

    /// Apply command-line flags (without the program name)
    ///
    /// Accepts both `--flag value` and `--flag=value`.
    pub fn apply_args<I>(mut self, args: I) -> SimResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
                None => (arg.clone(), None),
            };

            match flag.as_str() {
                "--sequential" => self.parallel = false,
                "--parallel" => self.parallel = true,
                "--trials" | "--steps" | "--mode" | "--seed" | "--sampling" | "--csv"
                | "--histogram-csv" | "--json" => {
                    let value = match inline {
                        Some(value) => value,
                        None => args.next().ok_or_else(|| SimError::InvalidConfiguration {
                            field: flag.clone(),
                            reason: "missing value".to_string(),
                        })?,
                    };
                    match flag.as_str() {
                        "--trials" => self.trials = parse_field(&flag, &value)?,
                        "--steps" => self.steps = parse_field(&flag, &value)?,
                        "--mode" => self.mode = value.parse()?,
                        "--seed" => self.seed = Some(parse_field(&flag, &value)?),
                        "--sampling" => self.sampling = value.parse()?,
                        "--csv" => self.csv_path = Some(PathBuf::from(value)),
                        "--histogram-csv" => self.histogram_csv_path = Some(PathBuf::from(value)),
                        _ => self.json_path = Some(PathBuf::from(value)),
                    }
                }
                other => {
                    return Err(SimError::InvalidConfiguration {
                        field: other.to_string(),
                        reason: "unknown option".to_string(),
                    })
                }
            }
        }
        Ok(self)
    }

    /// Validated simulation parameters
    pub fn simulation(&self) -> SimResult<SimulationConfig> {
        SimulationConfig::from_signed(self.trials, self.steps, self.mode)
    }

    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            seed: self.seed,
            sampling: self.sampling,
            parallel: self.parallel,
        }
    }
}

fn parse_field<T>(field: &str, raw: &str) -> SimResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim()
        .parse()
        .map_err(|e: T::Err| SimError::InvalidConfiguration {
            field: field.to_string(),
            reason: format!("cannot parse '{}': {}", raw, e),
        })
}

fn parse_bool(field: &str, raw: &str) -> SimResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(SimError::InvalidConfiguration {
            field: field.to_string(),
            reason: format!("expected a boolean, got '{}'", raw),
        }),
    }
}
