//! # Vault Configuration
//!
//! Loads [`VaultConfig`] from a JSON, YAML or TOML file, picking the format
//! from the file extension. YAML and TOML are behind the `yaml-config` and
//! `toml-config` features (both on by default).
//!
//! The `host` section seeds the simulated host the `vault` binary runs
//! against: known players and in-memory economies with starting balances.
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::kernel::constants;
use crate::kernel::error::{Error, Result};

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yaml, .yml) - requires "yaml-config" feature
    #[cfg(feature = "yaml-config")]
    Yaml,
    /// TOML format (.toml) - requires "toml-config" feature
    #[cfg(feature = "toml-config")]
    Toml,
}

impl ConfigFormat {
    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => "yaml",
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => "toml",
        }
    }

    /// Determine format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(ConfigFormat::Json),
                #[cfg(feature = "yaml-config")]
                "yaml" | "yml" => Some(ConfigFormat::Yaml),
                #[cfg(feature = "toml-config")]
                "toml" => Some(ConfigFormat::Toml),
                _ => None,
            })
    }
}

/// Update checker settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateSettings {
    pub enabled: bool,
    pub api_url: String,
    pub download_url: String,
}

impl Default for UpdateSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            api_url: constants::RELEASES_API_URL.to_string(),
            download_url: constants::DOWNLOAD_URL.to_string(),
        }
    }
}

/// A player the simulated host knows about
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSeed {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub online: bool,
    /// Nodes the host grants this player when online
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// An in-memory economy provider to register at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomySeed {
    pub name: String,
    /// Owner of the registration; defaults to the economy name
    #[serde(default)]
    pub owner: Option<String>,
    /// "lowest".."highest" or an integer; defaults to normal
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default = "default_singular")]
    pub currency_singular: String,
    #[serde(default = "default_plural")]
    pub currency_plural: String,
    #[serde(default)]
    pub balances: HashMap<Uuid, f64>,
}

fn default_singular() -> String {
    "dollar".to_string()
}

fn default_plural() -> String {
    "dollars".to_string()
}

/// Contents of the simulated host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostSeed {
    pub players: Vec<PlayerSeed>,
    pub economies: Vec<EconomySeed>,
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    pub update: UpdateSettings,
    pub host: HostSeed,
}

impl VaultConfig {
    /// Load from `path`, choosing the format by extension
    pub fn load(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path).ok_or_else(|| Error::UnsupportedConfigFormat {
            path: path.to_path_buf(),
        })?;
        let data = std::fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: "failed to read file".to_string(),
            source: Some(Box::new(e)),
        })?;
        let config = Self::deserialize(&data, format).map_err(|e| with_path(e, path))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Deserialize from string based on format
    pub fn deserialize(data: &str, format: ConfigFormat) -> Result<Self> {
        match format {
            ConfigFormat::Json => serde_json::from_str(data).map_err(|e| parse_error("JSON", e)),
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::from_str(data).map_err(|e| parse_error("YAML", e)),
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::from_str(data).map_err(|e| parse_error("TOML", e)),
        }
    }

    /// Serialize to string based on format
    pub fn serialize(&self, format: ConfigFormat) -> Result<String> {
        match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self).map_err(|e| parse_error("JSON", e)),
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::to_string(self).map_err(|e| parse_error("YAML", e)),
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::to_string_pretty(self).map_err(|e| parse_error("TOML", e)),
        }
    }
}

fn parse_error<E>(format: &str, err: E) -> Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    Error::Config {
        path: PathBuf::new(),
        message: format!("invalid {}: {}", format, err),
        source: Some(Box::new(err)),
    }
}

fn with_path(err: Error, path: &Path) -> Error {
    match err {
        Error::Config { message, source, .. } => Error::Config {
            path: path.to_path_buf(),
            message,
            source,
        },
        other => other,
    }
}

// Test module declaration
#[cfg(test)]
mod tests;
