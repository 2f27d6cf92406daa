//! Configuration file handling for the advisor and outbound links.
//!
//! The API key is never written to the file; only the name of the
//! environment variable that holds it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::links::DEFAULT_RETAILER;

/// Default generative-language endpoint (Gemini REST API)
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Default model used for advice
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
/// Environment variable read for the API key unless configured otherwise
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Advisor and link settings that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    pub endpoint: String,
    pub model: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    pub timeout_secs: u64,
    /// Retailer host used for product-search links
    pub retailer: String,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout_secs: 30,
            retailer: DEFAULT_RETAILER.to_string(),
        }
    }
}

impl AdvisorConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file; missing fields take defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let endpoint = self.endpoint.trim();
        if !endpoint.starts_with("https://") && !endpoint.starts_with("http://") {
            anyhow::bail!("Endpoint must start with http:// or https://");
        }

        if self.model.trim().is_empty() {
            anyhow::bail!("Model must be specified");
        }
        if self.model.contains(char::is_whitespace) || self.model.contains('/') {
            anyhow::bail!("Model name cannot contain whitespace or '/'");
        }

        let env = self.api_key_env.trim();
        if env.is_empty() {
            anyhow::bail!("API key environment variable name must be specified");
        }
        if !env.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            anyhow::bail!("API key environment variable can only contain letters, numbers, and underscores");
        }

        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            anyhow::bail!("Timeout must be between 1 and 300 seconds");
        }

        if self.retailer.trim().is_empty() || self.retailer.contains(char::is_whitespace) {
            anyhow::bail!("Retailer must be a host name such as www.amazon.in");
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// API key from the configured environment variable, if set and non-empty
    pub fn api_key(&self) -> Option<String> {
        std::env::var(self.api_key_env.trim())
            .ok()
            .filter(|k| !k.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_is_valid() {
        let config = AdvisorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let file = NamedTempFile::new().unwrap();
        let mut config = AdvisorConfig::default();
        config.model = "gemini-2.0-flash".to_string();
        config.retailer = "www.example.com".to_string();
        config.save_to_file(file.path()).unwrap();

        let loaded = AdvisorConfig::load_from_file(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_takes_defaults() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), r#"{ "timeout_secs": 5 }"#).unwrap();
        let loaded = AdvisorConfig::load_from_file(file.path()).unwrap();
        assert_eq!(loaded.timeout_secs, 5);
        assert_eq!(loaded.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = AdvisorConfig::default();
        config.endpoint = "ftp://nope".to_string();
        assert!(config.validate().is_err());

        let mut config = AdvisorConfig::default();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = AdvisorConfig::default();
        config.api_key_env = "MY KEY".to_string();
        assert!(config.validate().is_err());

        let mut config = AdvisorConfig::default();
        config.model = "models/gemini".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_json_reports_parse_error() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "not json").unwrap();
        let err = AdvisorConfig::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
