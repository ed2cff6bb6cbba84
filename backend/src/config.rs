//! Configuration management for the Taiwan Weather Proxy
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with WEATHER_PROXY__ prefix
//! 4. The conventional `CWA_API_KEY` and `PORT` variables

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Default CWA open-data API root
pub const DEFAULT_CWA_BASE_URL: &str = "https://opendata.cwa.gov.tw/api";

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// CWA open-data API configuration
    pub cwa: CwaConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CwaConfig {
    /// API root, without the dataset path
    pub base_url: String,

    /// Authorization key issued by the CWA open-data platform
    #[serde(default)]
    pub api_key: Option<String>,

    /// Upstream request timeout in seconds
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("WEATHER_PROXY_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("cwa.base_url", DEFAULT_CWA_BASE_URL)?
            .set_default("cwa.timeout_secs", 10)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (WEATHER_PROXY__ prefix)
            .add_source(
                Environment::with_prefix("WEATHER_PROXY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            // Conventional deployment variables win over everything else
            .set_override_option("cwa.api_key", std::env::var("CWA_API_KEY").ok())?
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .build()?;

        config.try_deserialize()
    }

    /// The API key, if one is configured and non-empty
    pub fn api_key(&self) -> Option<&str> {
        self.cwa
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            cwa: CwaConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for CwaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CWA_BASE_URL.to_string(),
            api_key: None,
            timeout_secs: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.cwa.base_url, DEFAULT_CWA_BASE_URL);
        assert_eq!(config.cwa.timeout_secs, 10);
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let mut config = Config::default();
        config.cwa.api_key = Some("   ".to_string());
        assert!(config.api_key().is_none());

        config.cwa.api_key = Some("CWA-1234".to_string());
        assert_eq!(config.api_key(), Some("CWA-1234"));
    }
}
