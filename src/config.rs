use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub window: WindowConfig,
}

/// Backend endpoints
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiConfig {
    /// Base URL of the versioned web API
    pub base_url: String,
    /// External web checkout the trolley hands off to
    pub checkout_url: String,
    /// Products per listing page
    pub page_size: u32,
}

/// UI behavior configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UiConfig {
    /// "dark" or "light"
    pub theme: String,
}

/// Initial window geometry
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api: ApiConfig {
                base_url: "https://localhost:7192/api/v1".to_string(),
                checkout_url: "https://localhost:7192/trolley/checkout".to_string(),
                page_size: 24,
            },
            ui: UiConfig {
                theme: "light".to_string(),
            },
            window: WindowConfig {
                width: 1100.0,
                height: 720.0,
            },
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "greengrocer") {
            let config_dir = proj_dirs.config_dir();
            return Some(config_dir.join("config.toml"));
        }
        None
    }

    /// Load configuration from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                match fs::read_to_string(&path) {
                    Ok(contents) => match toml::from_str::<Config>(&contents) {
                        Ok(config) => return config,
                        Err(e) => {
                            tracing::warn!(error = %e, "failed to parse config file, using defaults");
                        }
                    },
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to read config file, using defaults");
                    }
                }
            }
        }
        Config::default()
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }

            let contents = toml::to_string_pretty(self)?;
            fs::write(&path, contents)?;
            return Ok(());
        }

        Err("Could not determine config directory".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.ui.theme, "light");
        assert_eq!(config.api.page_size, 24);
        assert!(config.api.base_url.ends_with("/api/v1"));
        assert_eq!(config.window.width, 1100.0);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config.api.base_url, deserialized.api.base_url);
        assert_eq!(config.api.page_size, deserialized.api.page_size);
    }
}
