use std::str::FromStr;

use crate::error::{config_error, Result};

pub const ENV_SEED: &str = "RHAL_SEED";
pub const ENV_SAMPLES: &str = "RHAL_SAMPLES";
pub const ENV_ITERATIONS: &str = "RHAL_ITERATIONS";

/// Which harness to run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Correctness,
    Performance,
    Verify,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Correctness, Mode::Performance, Mode::Verify];
}

impl FromStr for Mode {
    type Err = crate::error::RhalError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "correctness" => Ok(Mode::Correctness),
            "performance" => Ok(Mode::Performance),
            "verify" => Ok(Mode::Verify),
            other => Err(config_error(
                "mode",
                format!("unknown mode `{other}` (expected correctness, performance or verify)"),
            )),
        }
    }
}

/// Runtime settings for the harnesses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Seed of the random verification sweep.
    pub seed: u64,
    /// Number of random vector pairs per operation in the sweep.
    pub samples: usize,
    /// Calls averaged into each performance timing.
    pub iterations: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            seed: 0x5EED,
            samples: 10_000,
            iterations: 1_000,
        }
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| config_error(key, format!("cannot parse `{raw}`")))
}

fn parse_count(key: &str, raw: &str) -> Result<usize> {
    let value: usize = parse_value(key, raw)?;

    if value == 0 {
        return Err(config_error(key, "must be greater than zero"));
    }

    Ok(value)
}

impl HarnessConfig {
    /// Reads `RHAL_SEED`, `RHAL_SAMPLES` and `RHAL_ITERATIONS` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Missing keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_SEED) {
            config.seed = parse_value(ENV_SEED, &raw)?;
        }
        if let Some(raw) = lookup(ENV_SAMPLES) {
            config.samples = parse_count(ENV_SAMPLES, &raw)?;
        }
        if let Some(raw) = lookup(ENV_ITERATIONS) {
            config.iterations = parse_count(ENV_ITERATIONS, &raw)?;
        }

        Ok(config)
    }

    /// Applies command line arguments on top of `self`.
    ///
    /// Positional arguments name modes. `--seed`, `--samples` and `--iterations` take a
    /// value. With no mode given, every mode runs.
    pub fn parse_args<I, S>(mut self, args: I) -> Result<(Self, Vec<Mode>)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut modes = Vec::new();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let arg = arg.as_ref();

            match arg {
                "--seed" | "--samples" | "--iterations" => {
                    let raw = args
                        .next()
                        .ok_or_else(|| config_error(arg, "missing value"))?;
                    let raw = raw.as_ref();

                    match arg {
                        "--seed" => self.seed = parse_value(arg, raw)?,
                        "--samples" => self.samples = parse_count(arg, raw)?,
                        _ => self.iterations = parse_count(arg, raw)?,
                    }
                }
                flag if flag.starts_with("--") => {
                    return Err(config_error(flag, "unknown flag"));
                }
                mode => {
                    let mode: Mode = mode.parse()?;
                    if !modes.contains(&mode) {
                        modes.push(mode);
                    }
                }
            }
        }

        if modes.is_empty() {
            modes.extend(Mode::ALL);
        }

        Ok((self, modes))
    }
}
