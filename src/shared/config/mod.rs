//! Application configuration module
//!
//! Provides configuration types for the application.

use serde::Deserialize;
use thiserror::Error;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Base URL of the hosted record service
    pub api_url: Option<String>,
    /// Campus slug used to scope listings (informational)
    pub campus: Option<String>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Parse a configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::InvalidFile(e.to_string()))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.api_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    api_url: Option<String>,
    campus: Option<String>,
}

impl AppConfigBuilder {
    /// Set the service URL
    pub fn api_url(mut self, url: String) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Set the campus slug
    pub fn campus(mut self, campus: String) -> Self {
        self.campus = Some(campus);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            api_url: self.api_url,
            campus: self.campus,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid config file: {0}")]
    InvalidFile(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
