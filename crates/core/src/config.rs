// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Monitor configuration
//!
//! Policy selection and fair-policy queue limits are the monitor's only
//! configuration surface.
//!
//! ```toml
//! policy = "fair"
//! car_limit = 10
//! ped_limit = 3
//! ```

use crate::policy::{Policy, DEFAULT_CAR_LIMIT, DEFAULT_PED_LIMIT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a monitor configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the config file
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or shape error
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range
    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Which policy to build
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    Simple,
    #[default]
    Fair,
}

/// Monitor configuration as written in a config file
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MonitorConfig {
    pub policy: PolicyKind,
    /// Waiting cars in one direction before the other loses its free pass
    pub car_limit: u32,
    /// Waiting pedestrians before cars lose their free pass
    pub ped_limit: u32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            policy: PolicyKind::default(),
            car_limit: DEFAULT_CAR_LIMIT,
            ped_limit: DEFAULT_PED_LIMIT,
        }
    }
}

impl MonitorConfig {
    pub fn simple() -> Self {
        Self {
            policy: PolicyKind::Simple,
            ..Self::default()
        }
    }

    pub fn fair(car_limit: u32, ped_limit: u32) -> Self {
        Self {
            policy: PolicyKind::Fair,
            car_limit,
            ped_limit,
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: MonitorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Limits only matter under the fair policy, where a zero limit would
    /// revoke the free pass permanently.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.policy == PolicyKind::Fair {
            if self.car_limit == 0 {
                return Err(ConfigError::Invalid {
                    field: "car_limit",
                    reason: "must be at least 1".to_string(),
                });
            }
            if self.ped_limit == 0 {
                return Err(ConfigError::Invalid {
                    field: "ped_limit",
                    reason: "must be at least 1".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn to_policy(&self) -> Result<Policy, ConfigError> {
        self.validate()?;
        Ok(match self.policy {
            PolicyKind::Simple => Policy::Simple,
            PolicyKind::Fair => Policy::fair_with_limits(self.car_limit, self.ped_limit),
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
