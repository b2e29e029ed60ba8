//! Configuration for the classifier

use crate::error::ClassifierError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Model to request from the hosted service
    pub model: String,

    /// Sampling temperature (low values bias toward deterministic output)
    pub temperature: f64,

    /// Maximum output tokens for one response
    pub max_output_tokens: u32,

    /// Maximum time for a single classification call (seconds).
    ///
    /// Expiry is treated as a standard "no usable response" failure; the
    /// classifier performs no retries.
    pub request_timeout_secs: u64,
}

impl ClassifierConfig {
    /// Get the request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ClassifierError> {
        if self.model.trim().is_empty() {
            return Err(ClassifierError::Config("model must not be empty".to_string()));
        }
        if !self.temperature.is_finite() || self.temperature < 0.0 {
            return Err(ClassifierError::Config(
                "temperature must be a non-negative number".to_string(),
            ));
        }
        if self.max_output_tokens == 0 {
            return Err(ClassifierError::Config(
                "max_output_tokens must be greater than 0".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(ClassifierError::Config(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ClassifierError> {
        toml::from_str(toml_str)
            .map_err(|e| ClassifierError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ClassifierError> {
        toml::to_string_pretty(self)
            .map_err(|e| ClassifierError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for ClassifierConfig {
    /// Defaults matching the hosted service's tuned parameters
    fn default() -> Self {
        Self {
            model: "gemini-1.5-flash-8b".to_string(),
            temperature: 0.1,
            max_output_tokens: 2000,
            request_timeout_secs: 30,
        }
    }
}
