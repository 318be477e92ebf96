//! Runtime configuration, from defaults and `SONGSMITH_*` environment variables.

use std::path::PathBuf;

use anyhow::Context;

use crate::exercise::EXERCISE_DURATION;

// -------------------------------------------------------------------------------------------------

/// Environment variable which overrides the prompt file path.
pub const PROMPTS_VAR: &str = "SONGSMITH_PROMPTS";
/// Environment variable which overrides the exercise duration in seconds.
pub const DURATION_VAR: &str = "SONGSMITH_DURATION";
/// Environment variable which sets a random seed for prompt picking.
pub const SEED_VAR: &str = "SONGSMITH_SEED";
/// Environment variable which sets the minimum log level, e.g. `info` or `debug`.
pub const LOG_VAR: &str = "SONGSMITH_LOG";

/// Default location of the prompt data file.
pub const DEFAULT_PROMPTS_PATH: &str = "data/prompts.json";

// -------------------------------------------------------------------------------------------------

/// Runtime settings of the songsmith tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON file with the writing prompts.
    pub prompts_path: PathBuf,
    /// Exercise length in seconds.
    pub duration: u32,
    /// Seed for prompt picking. Random when unset.
    pub seed: Option<u64>,
    /// Log level of the terminal logger.
    pub log_level: log::LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompts_path: PathBuf::from(DEFAULT_PROMPTS_PATH),
            duration: EXERCISE_DURATION,
            seed: None,
            log_level: log::LevelFilter::Warn,
        }
    }
}

impl Config {
    /// Default config with overrides from the process environment applied.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::default().with_vars(std::env::vars())
    }

    /// Apply overrides from the given environment variable pairs. Unrelated variables are
    /// ignored, invalid values are errors.
    pub fn with_vars<I, K, V>(mut self, vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (name, value) in vars {
            let value = value.as_ref().trim();
            match name.as_ref() {
                PROMPTS_VAR => self.prompts_path = PathBuf::from(value),
                DURATION_VAR => {
                    self.duration = parse_duration(value)
                        .with_context(|| format!("invalid value for {}", DURATION_VAR))?;
                }
                SEED_VAR => {
                    self.seed = Some(
                        value
                            .parse::<u64>()
                            .with_context(|| format!("invalid value for {}", SEED_VAR))?,
                    );
                }
                LOG_VAR => {
                    self.log_level = value
                        .parse::<log::LevelFilter>()
                        .with_context(|| format!("invalid value for {}", LOG_VAR))?;
                }
                _ => {}
            }
        }
        Ok(self)
    }

    /// Log level for the given verbosity count (`-v`, `-vv`, ...), never below the configured
    /// level.
    pub fn log_level_for_verbosity(&self, verbose: u8) -> log::LevelFilter {
        let level = match verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };
        level.max(self.log_level)
    }
}

/// Parse a positive duration in seconds.
pub fn parse_duration(value: &str) -> anyhow::Result<u32> {
    let duration = value
        .trim()
        .parse::<u32>()
        .with_context(|| format!("'{}' is not a number of seconds", value))?;
    anyhow::ensure!(duration > 0, "duration must be at least one second");
    Ok(duration)
}

// --------------------------------------------------------------------------------------------------
