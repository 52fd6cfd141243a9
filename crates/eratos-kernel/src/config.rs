//! Run configuration, loadable from TOML.
//!
//! ```toml
//! bound = 200
//! checkpoints = 20
//! one_is_prime = false
//! step_interval_ms = 50
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use crate::error::{ConfigError, SieveError};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BOUND: i64 = 100;
pub const DEFAULT_CHECKPOINTS: usize = 20;
pub const DEFAULT_STEP_INTERVAL_MS: u64 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SieveConfig {
    /// Upper end N of the range `1..=N`.
    pub bound: i64,
    /// Evenly spaced samples in the statistics series.
    pub checkpoints: usize,
    /// Seed value 1 as a sentinel prime, counted in the statistics.
    ///
    /// Off by default: 1 is then held in its own `unit` state.
    pub one_is_prime: bool,
    /// Delay between steps for animated drivers. The kernel never sleeps.
    pub step_interval_ms: u64,
}

impl Default for SieveConfig {
    fn default() -> Self {
        Self {
            bound: DEFAULT_BOUND,
            checkpoints: DEFAULT_CHECKPOINTS,
            one_is_prime: false,
            step_interval_ms: DEFAULT_STEP_INTERVAL_MS,
        }
    }
}

impl SieveConfig {
    /// Parse and validate a TOML document. `origin` names it in errors.
    pub fn from_toml_str(text: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::ParseToml {
            path: origin.to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&text, &path.display().to_string())?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bound < 1 {
            return Err(SieveError::InvalidBound { bound: self.bound }.into());
        }
        if self.checkpoints == 0 {
            return Err(ConfigError::Invalid(
                "checkpoints must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
