//! Configuration management for the NewsGraph engine
//!
//! Supports loading configuration from:
//! - Environment variables (prefixed with NEWSGRAPH__)
//! - Configuration files (config.toml, config.yaml)
//! - Default values

use crate::errors::{EngineError, Result};
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Engine configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Authority scorer configuration
    #[serde(default)]
    pub authority: AuthorityConfig,

    /// Echo chamber detection configuration
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Reporting configuration
    #[serde(default)]
    pub reporting: ReportingConfig,
}

/// Authority (PageRank) scorer parameters
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthorityConfig {
    /// Damping factor (typically 0.85)
    #[serde(default = "default_damping")]
    pub damping: f64,

    /// Maximum iterations before returning the best-effort vector
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// L1 convergence threshold between successive score vectors
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
}

/// Echo chamber detection parameters
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DetectionConfig {
    /// Minimum community size reported as a chamber
    #[serde(default = "default_min_chamber_size")]
    pub min_chamber_size: usize,
}

/// Reporting parameters
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportingConfig {
    /// Number of entries in the most-cited / most-citing rankings
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

// Default value functions
fn default_damping() -> f64 {
    0.85
}
fn default_max_iterations() -> usize {
    100
}
fn default_epsilon() -> f64 {
    1e-6
}
fn default_min_chamber_size() -> usize {
    3
}
fn default_top_n() -> usize {
    5
}

impl Default for AuthorityConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            max_iterations: default_max_iterations(),
            epsilon: default_epsilon(),
        }
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_chamber_size: default_min_chamber_size(),
        }
    }
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment and files
    pub fn load() -> std::result::Result<Self, ConfigError> {
        let config = Config::builder()
            // Load base config file
            .add_source(File::with_name("config/default").required(false))
            // Load local overrides
            .add_source(File::with_name("config/local").required(false))
            // Load from environment variables with NEWSGRAPH__ prefix
            // e.g., NEWSGRAPH__AUTHORITY__DAMPING=0.9
            .add_source(
                Environment::with_prefix("NEWSGRAPH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load from a specific TOML file
    pub fn from_file(path: &str) -> std::result::Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name(path))
            .add_source(
                Environment::with_prefix("NEWSGRAPH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Reject parameter values the algorithms cannot run with.
    pub fn validate(&self) -> Result<()> {
        if !(self.authority.damping > 0.0 && self.authority.damping < 1.0) {
            return Err(EngineError::Configuration {
                message: format!(
                    "authority.damping must be in (0, 1), got {}",
                    self.authority.damping
                ),
            });
        }
        if self.authority.max_iterations == 0 {
            return Err(EngineError::Configuration {
                message: "authority.max_iterations must be at least 1".into(),
            });
        }
        if self.authority.epsilon <= 0.0 {
            return Err(EngineError::Configuration {
                message: format!(
                    "authority.epsilon must be positive, got {}",
                    self.authority.epsilon
                ),
            });
        }
        if self.detection.min_chamber_size == 0 {
            return Err(EngineError::Configuration {
                message: "detection.min_chamber_size must be at least 1".into(),
            });
        }
        Ok(())
    }
}
