//! Calculator configuration.
//!
//! Validation uses Stillwater's `Validation` type so every problem with
//! a configuration is reported at once instead of one per attempt.

use crate::core::DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Problems with a calculator configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Storage key for '{field}' must not be empty")]
    EmptyKey { field: &'static str },

    #[error("History and theme share the storage key '{key}'")]
    DuplicateKey { key: String },

    #[error("History capacity must be at least 1")]
    ZeroCapacity,

    #[error("Configuration could not be parsed: {0}")]
    Parse(String),

    #[error("Invalid configuration: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
    Invalid(Vec<ConfigError>),
}

/// Storage keys and history size used by a calculator.
///
/// # Example
///
/// ```rust
/// use reckon::config::CalculatorConfig;
///
/// let config = CalculatorConfig::from_json(r#"{ "history_capacity": 5 }"#).unwrap();
/// assert_eq!(config.history_capacity, 5);
/// assert_eq!(config.history_key, "calculatorHistory");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Key holding the serialized history rows
    pub history_key: String,
    /// Key holding the theme flag
    pub theme_key: String,
    /// Maximum number of history entries kept
    pub history_capacity: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            history_key: "calculatorHistory".to_string(),
            theme_key: "calculatorTheme".to_string(),
            history_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl CalculatorConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validated()
    }

    /// Check every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigError>>> = Vec::new();

        for (field, key) in [
            ("history_key", &self.history_key),
            ("theme_key", &self.theme_key),
        ] {
            let check = if key.is_empty() {
                Validation::fail(ConfigError::EmptyKey { field })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        let distinct = if self.history_key == self.theme_key {
            Validation::fail(ConfigError::DuplicateKey {
                key: self.history_key.clone(),
            })
        } else {
            Validation::success(())
        };
        checks.push(distinct);

        let capacity = if self.history_capacity == 0 {
            Validation::fail(ConfigError::ZeroCapacity)
        } else {
            Validation::success(())
        };
        checks.push(capacity);

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate, returning the config or every violation as one error.
    pub fn validated(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(errors) => {
                Err(ConfigError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }
}
