//! Configuration loading traits and harness configuration.
//!
//! Any `serde`-deserializable type can be read from a TOML file through the
//! blanket [`ConfigLoader`] implementation. [`SimConfig`] is the file layout
//! understood by the `crane3d_sim` harness.
//!
//! # Usage
//!
//! ```rust,no_run
//! use crane3d_common::config::{ConfigError, ConfigLoader, SimConfig};
//! use std::path::Path;
//!
//! fn main() -> Result<(), ConfigError> {
//!     let config = SimConfig::load(Path::new("crane.toml"))?;
//!     config.validate()?;
//!     println!("Variant: {}", config.model.model_type);
//!     Ok(())
//! }
//! ```

use crate::consts::{DEFAULT_FIXED_TIME, DEFAULT_SERVICE_NAME};
use crate::crane::config::ModelConfig;
use crate::crane::types::ControlForces;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Error type for configuration loading operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Configuration file not found at specified path.
    #[error("Configuration file not found")]
    FileNotFound,

    /// Reading or TOML parsing failed.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Semantic validation failed.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Log level for application logging.
///
/// Uses lowercase serde values for TOML compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Directive string understood by `tracing` filters.
    pub fn as_directive(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

fn default_service_name() -> String {
    DEFAULT_SERVICE_NAME.to_string()
}

/// Logging and identity section.
///
/// ```toml
/// [shared]
/// log_level = "debug"
/// service_name = "crane3d-bench-01"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedConfig {
    #[serde(default)]
    pub log_level: LogLevel,

    /// Instance identifier, shown in log lines.
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            service_name: default_service_name(),
        }
    }
}

impl SharedConfig {
    /// Returns `ConfigError::ValidationError` if `service_name` is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_name.is_empty() {
            return Err(ConfigError::ValidationError(
                "service_name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_fixed_time() -> f64 {
    DEFAULT_FIXED_TIME
}

fn default_frame_time() -> f64 {
    1.0 / 60.0
}

fn default_duration() -> f64 {
    1.0
}

fn default_print_every() -> u32 {
    0
}

/// How the harness drives the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Fixed integration step [s].
    #[serde(default = "default_fixed_time")]
    pub fixed_time: f64,

    /// Simulated caller frame period [s].
    #[serde(default = "default_frame_time")]
    pub frame_time: f64,

    /// Total simulated time [s].
    #[serde(default = "default_duration")]
    pub duration: f64,

    /// Integrate each frame in a single step of `frame_time`.
    #[serde(default)]
    pub variable_step: bool,

    /// Constant forces applied every frame.
    #[serde(default)]
    pub forces: ControlForces,

    /// Print the state every N frames (0 = final state only).
    #[serde(default = "default_print_every")]
    pub print_every: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            fixed_time: default_fixed_time(),
            frame_time: default_frame_time(),
            duration: default_duration(),
            variable_step: false,
            forces: ControlForces::ZERO,
            print_every: default_print_every(),
        }
    }
}

impl RunConfig {
    /// Number of caller frames needed to cover `duration`.
    pub fn frame_count(&self) -> u64 {
        if self.frame_time <= 0.0 {
            return 0;
        }
        (self.duration / self.frame_time).ceil().max(0.0) as u64
    }

    /// Validation rules: `fixed_time` > 0, `frame_time` > 0, `duration` >= 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fixed_time > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "fixed_time must be > 0 (got {})",
                self.fixed_time
            )));
        }
        if !(self.frame_time > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "frame_time must be > 0 (got {})",
                self.frame_time
            )));
        }
        if !(self.duration >= 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "duration must be >= 0 (got {})",
                self.duration
            )));
        }
        Ok(())
    }
}

/// Complete harness configuration file.
///
/// Every section is optional.
///
/// ```toml
/// [shared]
/// log_level = "info"
///
/// [model]
/// model_type = "non_linear_complete"
///
/// [run]
/// duration = 5.0
/// forces = { rail = 10.0, cart = 0.0, wind = 0.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimConfig {
    #[serde(default)]
    pub shared: SharedConfig,

    #[serde(default)]
    pub model: ModelConfig,

    #[serde(default)]
    pub run: RunConfig,
}

impl SimConfig {
    /// Validate all sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()?;
        self.model.validate()?;
        self.run.validate()
    }
}

/// Trait for loading configuration from TOML files.
///
/// # Contract
///
/// - Returns `ConfigError::FileNotFound` if the file does not exist
/// - Returns `ConfigError::ParseError` if the file cannot be read or the
///   TOML is invalid for `Self`
pub trait ConfigLoader: Sized + serde::de::DeserializeOwned {
    /// Load configuration from a TOML file.
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound
            } else {
                ConfigError::ParseError(e.to_string())
            }
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

// Blanket implementation: any serde-deserializable struct is loadable.
impl<T: serde::de::DeserializeOwned> ConfigLoader for T {}
