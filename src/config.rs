//! Configuration management for tubetui
//!
//! Handles config file loading/saving.
//! Config is stored at ~/.config/tubetui/config.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Base URL used when neither the environment nor the config file sets one
const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Catalog backend base URL
    pub api_url: Option<String>,
    /// Preferred local player ("mpv" or "vlc")
    pub player: Option<String>,
}

impl Config {
    /// Get config file path (~/.config/tubetui/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tubetui").join("config.toml"))
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Self {
        Self::path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::path().ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// Get the catalog base URL with fallback chain:
    /// 1. Environment variable TUBETUI_API_URL
    /// 2. Config file
    /// 3. Built-in default
    pub fn api_url(&self) -> String {
        if let Ok(url) = std::env::var("TUBETUI_API_URL") {
            return url;
        }
        self.api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_url.is_none());
        assert!(config.player.is_none());
    }

    #[test]
    fn test_api_url_prefers_file_over_default() {
        let config = Config {
            api_url: Some("http://catalog.example:8080".to_string()),
            player: None,
        };
        // Only meaningful when the env var is unset; CI runs without it.
        if std::env::var("TUBETUI_API_URL").is_err() {
            assert_eq!(config.api_url(), "http://catalog.example:8080");
        }
    }

    #[test]
    fn test_api_url_default() {
        if std::env::var("TUBETUI_API_URL").is_err() {
            assert_eq!(Config::default().api_url(), DEFAULT_API_URL);
        }
    }

    #[test]
    fn test_config_roundtrip_toml() {
        let config = Config {
            api_url: Some("http://localhost:4000".to_string()),
            player: Some("mpv".to_string()),
        };
        let s = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&s).unwrap();
        assert_eq!(back.api_url.as_deref(), Some("http://localhost:4000"));
        assert_eq!(back.player.as_deref(), Some("mpv"));
    }
}
