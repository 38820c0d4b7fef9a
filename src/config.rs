// Global configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub startup: StartupConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the prompt API, including the /api path segment
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartupConfig {
    /// Whether to fetch the prompt list when the TUI launches
    #[serde(default = "default_fetch_on_launch")]
    pub fetch_on_launch: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// How many of the most recent prompts are submitted for pattern analysis
    #[serde(default = "default_analysis_window")]
    pub analysis_window: usize,

    /// How many saved prompts the sidebar shows before truncating
    #[serde(default = "default_sidebar_limit")]
    pub sidebar_limit: usize,
}

fn default_base_url() -> String {
    "http://localhost:5005/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_fetch_on_launch() -> bool {
    true
}

fn default_analysis_window() -> usize {
    10
}

fn default_sidebar_limit() -> usize {
    12
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            fetch_on_launch: default_fetch_on_launch(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            analysis_window: default_analysis_window(),
            sidebar_limit: default_sidebar_limit(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "macos") {
            dirs::home_dir()
                .context("Could not determine home directory")?
                .join(".config")
                .join("promptdash")
        } else {
            // Linux, Windows, and others
            dirs::config_dir()
                .context("Could not determine config directory")?
                .join("promptdash")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from disk, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path).with_context(|| {
                format!("Failed to read config file: {}", config_path.display())
            })?;

            let config: Config = toml::from_str(&contents).with_context(|| {
                format!("Failed to parse config file: {}", config_path.display())
            })?;

            Ok(config)
        } else {
            let config = Config::default();

            // Try to save the default config, but don't fail if we can't
            // (e.g., if the directory isn't writable)
            if let Err(e) = config.save() {
                eprintln!("Warning: Could not create default config file: {}", e);
                eprintln!(
                    "Using built-in defaults. Run 'promptdash init-config' to create a config file."
                );
            }

            Ok(config)
        }
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Check if config file exists
    pub fn exists() -> bool {
        Self::config_path().map(|p| p.exists()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:5005/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.startup.fetch_on_launch, true);
        assert_eq!(config.defaults.analysis_window, 10);
        assert_eq!(config.defaults.sidebar_limit, 12);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();

        // Should be able to deserialize back
        let deserialized: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(deserialized.api.base_url, config.api.base_url);
        assert_eq!(
            deserialized.startup.fetch_on_launch,
            config.startup.fetch_on_launch
        );
    }

    #[test]
    fn test_partial_config_uses_field_defaults() {
        // A config file that only overrides the base URL keeps the rest
        let parsed: Config = toml::from_str(
            r#"
            [api]
            base_url = "http://10.0.0.5:5005/api"
            "#,
        )
        .unwrap();

        assert_eq!(parsed.api.base_url, "http://10.0.0.5:5005/api");
        assert_eq!(parsed.api.timeout_secs, 30);
        assert_eq!(parsed.defaults.analysis_window, 10);
    }
}
