//! Configuration system
//!
//! Geometry has a single tunable, the comparison margin, plus the default
//! log filter used by binaries embedding the crate. Both are loaded from TOML
//! or RON and applied once at startup with [`GeometryConfig::install`].

use std::str::FromStr;

pub use serde::{Deserialize, Serialize};

use crate::tolerance::{self, DEFAULT_EPSILON};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Values that parsed but cannot be applied
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Comparison margin settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToleranceConfig {
    /// Margin added to every geometric comparison
    pub epsilon: f32,
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self { epsilon: DEFAULT_EPSILON }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level filter; `RUST_LOG` still takes precedence
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

/// Top-level geometry configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Tolerance settings
    pub tolerance: ToleranceConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl GeometryConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comparison margin
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.tolerance.epsilon = epsilon;
        self
    }

    /// Set the default log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    /// Check that every value can be applied
    pub fn validate(&self) -> Result<(), String> {
        let epsilon = self.tolerance.epsilon;
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(format!("Epsilon must be finite and non-negative, got {epsilon}"));
        }
        if log::LevelFilter::from_str(&self.logging.level).is_err() {
            return Err(format!("Unknown log level: {}", self.logging.level));
        }
        Ok(())
    }

    /// Validate and apply the tolerance settings process-wide
    ///
    /// Call this once during startup, before any predicates are evaluated.
    pub fn install(&self) -> Result<(), ConfigError> {
        self.validate().map_err(ConfigError::Invalid)?;
        tolerance::set_epsilon(self.tolerance.epsilon).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        log::debug!("Installed geometry configuration {:?}", self);
        Ok(())
    }
}

impl Config for GeometryConfig {}
