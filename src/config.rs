//! Configuration for the SurveyX CLI
//!
//! A single TOML file under the platform config directory holds the backend
//! base URL. `SURVEYX_API_URL` overrides the file for one-off invocations.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable that overrides the configured base URL.
pub const API_URL_ENV: &str = "SURVEYX_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Get the directory holding config.toml and session.json
pub fn config_dir() -> Result<PathBuf> {
    let dir = if cfg!(target_os = "linux") {
        dirs::config_dir()
            .context("Failed to get XDG config directory")?
            .join("surveyx-cli")
    } else {
        dirs::home_dir()
            .context("Failed to get home directory")?
            .join(".surveyx-cli")
    };

    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory: {:?}", dir))?;
        log::info!("Created config directory: {:?}", dir);
    }

    Ok(dir)
}

impl Config {
    /// Load configuration, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = config_dir()?.join("config.toml");
        log::debug!("Loading config from: {:?}", path);

        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            toml::from_str(&raw)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?
        } else {
            Self::default()
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            log::debug!("Base URL overridden via {}", API_URL_ENV);
            config.base_url = url;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_default() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn partial_toml_uses_default_fields() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");

        let config: Config = toml::from_str("base_url = \"https://surveys.example.com\"").unwrap();
        assert_eq!(config.base_url, "https://surveys.example.com");
    }
}
