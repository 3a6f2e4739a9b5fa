//! Editor resource configuration
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables: `VOID_RESOURCE_MIN_DELAY`, `VOID_RESOURCE_MAX_DELAY`,
//!    `VOID_RESOURCE_SEED`
//! 2. Config file (TOML)
//! 3. Built-in defaults
//!
//! # Example Config File
//!
//! ```toml
//! min_load_delay_secs = 0.0
//! max_load_delay_secs = 1.0
//! seed = 42        # optional, for reproducible delays
//! enabled = true
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding the minimum delay
pub const ENV_MIN_DELAY: &str = "VOID_RESOURCE_MIN_DELAY";
/// Environment variable overriding the maximum delay
pub const ENV_MAX_DELAY: &str = "VOID_RESOURCE_MAX_DELAY";
/// Environment variable overriding the delay seed
pub const ENV_SEED: &str = "VOID_RESOURCE_SEED";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid load delay bounds: min {min}s, max {max}s")]
    InvalidDelay { min: f32, max: f32 },

    #[error("Invalid value for {var}: '{value}'")]
    InvalidOverride { var: &'static str, value: String },
}

/// Settings for the simulated backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorResourceConfig {
    /// Lower bound of the simulated asset-load delay, in seconds
    pub min_load_delay_secs: f32,
    /// Upper bound of the simulated asset-load delay, in seconds
    pub max_load_delay_secs: f32,
    /// Seed for the delay generator; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Whether the backend advances on tick
    pub enabled: bool,
}

impl Default for EditorResourceConfig {
    fn default() -> Self {
        Self {
            min_load_delay_secs: 0.0,
            max_load_delay_secs: 1.0,
            seed: None,
            enabled: true,
        }
    }
}

impl EditorResourceConfig {
    /// Fixed delay for every load
    pub fn with_fixed_delay(mut self, secs: f32) -> Self {
        self.min_load_delay_secs = secs;
        self.max_load_delay_secs = secs;
        self
    }

    pub fn with_delay_range(mut self, min_secs: f32, max_secs: f32) -> Self {
        self.min_load_delay_secs = min_secs;
        self.max_load_delay_secs = max_secs;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Parse from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file, then apply environment overrides
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&text)?;
        config.apply_env_overrides()?;
        config.validate()?;
        log::debug!("Loaded resource config from {}", path.display());
        Ok(config)
    }

    /// Apply `VOID_RESOURCE_*` environment variables
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|var| std::env::var(var).ok())
    }

    /// Apply overrides from an arbitrary variable source
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(value) = lookup(ENV_MIN_DELAY) {
            self.min_load_delay_secs = parse_override(ENV_MIN_DELAY, &value)?;
        }
        if let Some(value) = lookup(ENV_MAX_DELAY) {
            self.max_load_delay_secs = parse_override(ENV_MAX_DELAY, &value)?;
        }
        if let Some(value) = lookup(ENV_SEED) {
            self.seed = Some(parse_override(ENV_SEED, &value)?);
        }
        Ok(())
    }

    /// Check the delay bounds
    ///
    /// Both bounds must be representable as a [`Duration`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.min_load_delay_secs, self.max_load_delay_secs);
        if !min.is_finite()
            || !max.is_finite()
            || min < 0.0
            || max < min
            || Duration::try_from_secs_f32(max).is_err()
        {
            return Err(ConfigError::InvalidDelay { min, max });
        }
        Ok(())
    }
}

fn parse_override<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidOverride {
        var,
        value: value.to_string(),
    })
}
