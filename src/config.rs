//! Application configuration management.
//!
//! This module handles loading and saving the application configuration,
//! which holds an optional override for the catalog API base URL.
//!
//! Configuration is stored at `~/.config/hangar/config.json`; the
//! `HANGAR_BASE_URL` environment variable takes precedence over the file.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for the config directory path
const APP_NAME: &str = "hangar";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Default catalog endpoint
const DEFAULT_BASE_URL: &str = "https://swapi.dev/api/";

/// Environment variable overriding the configured base URL
const BASE_URL_ENV: &str = "HANGAR_BASE_URL";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub base_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            serde_json::from_str(&contents)?
        } else {
            Self::default()
        };

        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.is_empty() {
                config.base_url = Some(url);
            }
        }

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Effective base URL, normalized to end with a slash.
    pub fn base_url(&self) -> String {
        let mut url = self
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !url.ends_with('/') {
            url.push('/');
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_defaults_to_public_endpoint() {
        let config = Config::default();
        assert_eq!(config.base_url(), "https://swapi.dev/api/");
    }

    #[test]
    fn test_base_url_gains_a_trailing_slash() {
        let config = Config {
            base_url: Some("http://localhost:8080/api".to_string()),
        };
        assert_eq!(config.base_url(), "http://localhost:8080/api/");
    }

    #[test]
    fn test_base_url_keeps_an_existing_trailing_slash() {
        let config = Config {
            base_url: Some("http://localhost:8080/api/".to_string()),
        };
        assert_eq!(config.base_url(), "http://localhost:8080/api/");
    }
}
