// SPDX-License-Identifier: GPL-3.0-only
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use smackmaster_shared::{RoastTarget, Tone};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_ROAST_ENDPOINT: &str = "/roast";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmackConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub roast_endpoint: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub default_tone: Tone,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            roast_endpoint: DEFAULT_ROAST_ENDPOINT.to_string(),
        }
    }
}

impl SmackConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
                PathBuf::from(home).join(".config")
            })
            .join("smackmaster");

        config_dir.join("config.toml")
    }

    /// Load configuration from disk, falling back to defaults
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    #[must_use]
    pub fn load_from(config_path: &Path) -> Self {
        match fs::read_to_string(config_path) {
            Ok(content) => match toml::from_str::<SmackConfig>(&content) {
                Ok(config) => {
                    debug!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    warn!(
                        "Failed to parse config file {}: {e}. Using defaults.",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(e) => {
                debug!(
                    "Config file {} not found or unreadable: {e}. Using defaults.",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    /// Save configuration to disk
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be created,
    /// serialization fails, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::config_path())
    }

    /// # Errors
    ///
    /// Same as [`SmackConfig::save`].
    pub fn save_to(&self, config_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_content = toml::to_string_pretty(self)?;
        fs::write(config_path, toml_content)?;

        debug!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Where roast requests go
    #[must_use]
    pub fn target(&self) -> RoastTarget {
        RoastTarget::new(&self.api.base_url, &self.api.roast_endpoint)
    }
}
