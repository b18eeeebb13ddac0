//! Game Configuration
//!
//! The range and the shot budget are fixed. Only the random seed and the
//! log filter can be set, through the environment.

use thiserror::Error;

use crate::core::rng::DeterministicRng;
use crate::MAX_VALUE;

/// Environment variable holding a fixed base seed.
pub const SEED_ENV: &str = "GOLF_GUESS_SEED";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "RUST_LOG";

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Seed is not an unsigned 64-bit integer.
    #[error("invalid GOLF_GUESS_SEED value: {0:?}")]
    InvalidSeed(String),
}

/// Game configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Largest possible secret.
    pub max_value: u32,
    /// Base seed. `None` draws one from entropy.
    pub seed: Option<u64>,
    /// Tracing filter directive.
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_value: MAX_VALUE,
            seed: None,
            log_filter: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(SEED_ENV) {
            let seed = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidSeed(raw.clone()))?;
            config.seed = Some(seed);
        }

        if let Some(filter) = lookup(LOG_ENV).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        Ok(config)
    }

    /// Build the RNG that picks secrets.
    pub fn rng(&self) -> DeterministicRng {
        match self.seed {
            Some(seed) => DeterministicRng::new(seed),
            None => DeterministicRng::from_entropy(),
        }
    }
}
