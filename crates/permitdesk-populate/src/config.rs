//! Configuration for the population flow

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for `PdfPopulator`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulateConfig {
    /// Maximum time for the provider round trip (seconds)
    pub request_timeout_secs: u64,

    /// Echo the input template reference back as the "populated" document
    ///
    /// No field filling happens either way; the echo exists for callers that
    /// offer the template for download next to the extracted data.
    pub echo_template: bool,
}

impl PopulateConfig {
    /// Get the request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("failed to serialize to TOML: {}", e))
    }
}

impl Default for PopulateConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 60,
            echo_template: true,
        }
    }
}
