//! Session configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `SNAKE_TICK_MS`: Tick interval in milliseconds (default: 130)
//! - `SNAKE_SEED`: RNG seed for food placement (default: random)
//! - `SNAKE_FOOD_STRATEGY`: `rejection` or `free-cells` (default: `rejection`)
//! - `SNAKE_SWIPE_THRESHOLD`: Mouse drag distance in cells before a swipe (default: 3)
//! - `SNAKE_COMMAND_BUFFER`: Pending command capacity (default: 32)
//! - `SNAKE_LOG_FILE`: Write logs to this file (default: logging off in the TUI)

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::core::FoodStrategy;
use crate::types::TICK_MS;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key}: cannot parse {value:?}")]
    Invalid { key: &'static str, value: String },

    #[error("{key} must be greater than zero")]
    Zero { key: &'static str },

    #[error("{key}: unknown food strategy {value:?} (expected \"rejection\" or \"free-cells\")")]
    UnknownStrategy { key: &'static str, value: String },
}

/// Settings for a game session and its terminal front end.
#[derive(Debug, Clone, PartialEq)]
pub struct SnakeConfig {
    pub tick_ms: u64,
    /// `None` draws a seed from the OS at session start.
    pub seed: Option<u64>,
    pub food_strategy: FoodStrategy,
    pub swipe_threshold: f32,
    pub command_buffer: usize,
    pub log_file: Option<PathBuf>,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            seed: None,
            food_strategy: FoodStrategy::default(),
            swipe_threshold: 3.0,
            command_buffer: 32,
            log_file: None,
        }
    }
}

impl SnakeConfig {
    /// Create from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary key lookup.
    ///
    /// Unset or blank keys keep their defaults; malformed values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();

        if let Some(tick_ms) = parse::<u64>("SNAKE_TICK_MS", read("SNAKE_TICK_MS"))? {
            if tick_ms == 0 {
                return Err(ConfigError::Zero {
                    key: "SNAKE_TICK_MS",
                });
            }
            config.tick_ms = tick_ms;
        }

        config.seed = parse::<u64>("SNAKE_SEED", read("SNAKE_SEED"))?;

        if let Some(value) = read("SNAKE_FOOD_STRATEGY") {
            config.food_strategy =
                FoodStrategy::from_str(&value).ok_or(ConfigError::UnknownStrategy {
                    key: "SNAKE_FOOD_STRATEGY",
                    value,
                })?;
        }

        if let Some(threshold) =
            parse::<f32>("SNAKE_SWIPE_THRESHOLD", read("SNAKE_SWIPE_THRESHOLD"))?
        {
            if threshold <= 0.0 || !threshold.is_finite() {
                return Err(ConfigError::Invalid {
                    key: "SNAKE_SWIPE_THRESHOLD",
                    value: threshold.to_string(),
                });
            }
            config.swipe_threshold = threshold;
        }

        if let Some(capacity) =
            parse::<usize>("SNAKE_COMMAND_BUFFER", read("SNAKE_COMMAND_BUFFER"))?
        {
            config.command_buffer = capacity.max(1);
        }

        config.log_file = read("SNAKE_LOG_FILE").map(PathBuf::from);

        Ok(config)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

fn parse<T: FromStr>(key: &'static str, value: Option<String>) -> Result<Option<T>, ConfigError> {
    match value {
        None => Ok(None),
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
