//! Configuration management for regrid.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::column::Tolerances;
use crate::error::{RegridError, Result};
use crate::interpolation::Policy;

/// Command-line arguments for regrid
#[derive(Parser, Debug)]
#[command(name = "regrid")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the JSON resampling job (a grid job or a column job)
    pub job_file: PathBuf,

    /// Interpolation policy (linear, nearest, piecewise_constant, linear_periodic)
    #[arg(short = 'P', long, env = "REGRID_POLICY")]
    pub policy: Option<String>,

    /// Period of the input grid, required by linear_periodic
    #[arg(short, long, env = "REGRID_PERIOD")]
    pub period: Option<f64>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "REGRID_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "REGRID_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Interpolation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpolationConfig {
    /// Interpolation policy name
    #[serde(default = "default_policy")]
    pub policy: String,

    /// Period for linear_periodic
    #[serde(default)]
    pub period: Option<f64>,
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Interpolation configuration
    #[serde(default)]
    pub interpolation: InterpolationConfig,

    /// Tolerances of column operations, used by column jobs
    #[serde(default)]
    pub column: Tolerances,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<(Self, PathBuf)> {
        let args = Args::parse();
        Self::from_args(args)
    }

    /// Build the configuration from already parsed arguments
    pub fn from_args(args: Args) -> Result<(Self, PathBuf)> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments
        if let Some(policy) = args.policy {
            config.interpolation.policy = policy;
        }
        if args.period.is_some() {
            config.interpolation.period = args.period;
        }
        if let Some(log_level) = args.log_level {
            config.log_level = log_level;
        }

        Ok((config, args.job_file))
    }

    /// Load configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.interpolation.policy = other.interpolation.policy;
        if other.interpolation.period.is_some() {
            self.interpolation.period = other.interpolation.period;
        }
        self.column = other.column;
        self.log_level = other.log_level;
    }

    /// The configured interpolation policy
    pub fn policy(&self) -> Result<Policy> {
        Policy::from_name(&self.interpolation.policy, self.interpolation.period)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // Validate log level
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(RegridError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        // Validate interpolation policy
        let policy = self.policy().map_err(|e| RegridError::Config {
            message: format!(
                "{}. Policy must be one of: {}",
                e,
                Policy::NAMES.join(", ")
            ),
        })?;
        if let Policy::LinearPeriodic { period } = policy {
            if !(period > 0.0) {
                return Err(RegridError::Config {
                    message: format!("Period must be positive, got {}", period),
                });
            }
        }

        // Validate tolerances
        if !(self.column.level >= 0.0) || !(self.column.coverage >= 0.0) {
            return Err(RegridError::Config {
                message: format!(
                    "Tolerances must be non-negative, got level = {}, coverage = {}",
                    self.column.level, self.column.coverage
                ),
            });
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interpolation: InterpolationConfig::default(),
            column: Tolerances::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for InterpolationConfig {
    fn default() -> Self {
        Self {
            policy: default_policy(),
            period: None,
        }
    }
}

// Default value functions for serde
fn default_policy() -> String {
    "linear".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
