//! Client Configuration
//!
//! Resolves the hosted service URL, in order: the `QUADMARKET_API_URL`
//! environment variable, a TOML file under the platform config directory,
//! then the local-dev default.

use std::path::PathBuf;

use crate::shared::config::AppConfig;

/// Default service URL for local development
const DEFAULT_API_URL: &str = "http://127.0.0.1:8085";

/// Application configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        let app = if let Ok(url) = std::env::var("QUADMARKET_API_URL") {
            AppConfig::builder().api_url(url).build().unwrap_or_default()
        } else if let Some(from_file) = load_config_file() {
            from_file
        } else {
            AppConfig::default()
        };
        Self { app }
    }
}

impl Config {
    /// Create a new configuration with default resolution
    pub fn new() -> Self {
        Self::default()
    }

    /// Base URL of the hosted service
    pub fn api_url(&self) -> &str {
        self.app.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// Campus slug, if configured
    pub fn campus(&self) -> Option<&str> {
        self.app.campus.as_deref()
    }
}

/// Path of the optional config file
fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("quadmarket").join("config.toml"))
}

fn load_config_file() -> Option<AppConfig> {
    let path = config_file_path()?;
    let text = std::fs::read_to_string(&path).ok()?;
    match AppConfig::from_toml(&text) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("ignoring invalid config file {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_url() {
        // Env var may be set by the harness; only check the fallback shape
        let config = Config { app: AppConfig::default() };
        assert_eq!(config.api_url(), "http://127.0.0.1:8085");
    }

    #[test]
    fn test_configured_url_wins() {
        let app = AppConfig::builder()
            .api_url("https://api.quadmarket.example".to_string())
            .build()
            .unwrap();
        let config = Config { app };
        assert_eq!(config.api_url(), "https://api.quadmarket.example");
    }
}
