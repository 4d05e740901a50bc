use std::path::PathBuf;

use thiserror::Error;

use crate::rule_set::RuleError;
use crate::rule_set::RuleSet;

/// Steps run when none are asked for.
pub const DEFAULT_STEPS: usize = 10;

pub const USAGE: &str = "\
usage: quadlife [--steps N] [--rule RULE] [--input PLOT]

Reads (X,Y) pairs from stdin, one per line, until a blank line, runs the
simulation and prints the result in Life 1.06 format.

  --steps N      generations to run (default 10)
  --rule RULE    B3/S23, b3s23 or 23/3 style rule (default B3/S23)
  --input PLOT   read the starting cells from a Life 1.06 file instead
  --help         print this message

Set RUST_LOG (e.g. RUST_LOG=debug) for per-generation logging.";

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub steps: usize,
    pub rules: RuleSet,
    pub input: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            steps: DEFAULT_STEPS,
            rules: RuleSet::default(),
            input: None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown argument \"{0}\"")]
    Unknown(String),

    #[error("Missing value for {flag}")]
    MissingValue { flag: &'static str },

    #[error("Invalid step count \"{0}\"")]
    Steps(String),

    #[error("Invalid rule: {0}")]
    Rule(#[from] RuleError),

    #[error("help requested")]
    Help,
}

impl Config {
    /// Parse arguments, not including the program name.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--steps" | "-n" => {
                    let value = args
                        .next()
                        .ok_or(ConfigError::MissingValue { flag: "--steps" })?;

                    config.steps = value.parse().map_err(|_| ConfigError::Steps(value))?;
                }
                "--rule" | "-r" => {
                    let value = args
                        .next()
                        .ok_or(ConfigError::MissingValue { flag: "--rule" })?;

                    config.rules = value.parse()?;
                }
                "--input" | "-i" => {
                    let value = args
                        .next()
                        .ok_or(ConfigError::MissingValue { flag: "--input" })?;

                    config.input = Some(PathBuf::from(value));
                }
                "--help" | "-h" => return Err(ConfigError::Help),
                _ => return Err(ConfigError::Unknown(arg)),
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, ConfigError> {
        Config::from_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults() {
        assert_eq!(parse(&[]), Ok(Config::default()));
        assert_eq!(Config::default().steps, 10);
    }

    #[test]
    fn all_flags() {
        let config = parse(&["--steps", "4", "--rule", "B36/S23", "--input", "a.lif"]).unwrap();

        assert_eq!(config.steps, 4);
        assert_eq!(config.rules.to_string(), "B36/S23");
        assert_eq!(config.input, Some(PathBuf::from("a.lif")));
    }

    #[test]
    fn errors() {
        assert_eq!(
            parse(&["--steps"]),
            Err(ConfigError::MissingValue { flag: "--steps" })
        );
        assert_eq!(
            parse(&["--steps", "-1"]),
            Err(ConfigError::Steps("-1".to_string()))
        );
        assert_eq!(
            parse(&["--rule", "B0/S"]),
            Err(ConfigError::Rule(RuleError::BirthOnZero))
        );
        assert_eq!(
            parse(&["--frobnicate"]),
            Err(ConfigError::Unknown("--frobnicate".to_string()))
        );
        assert_eq!(parse(&["-h"]), Err(ConfigError::Help));
    }
}
