//! Lumen Configuration
//!
//! Handles loading configuration from ~/.lumen/config.toml. Every field has
//! a default, so a missing file or a partial file is valid.

use lumen_tutorial::{AssetLayout, DEFAULT_ASSET_ROOT, DEFAULT_IMAGE_EXTENSION};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration directory name
const CONFIG_DIR_NAME: &str = ".lumen";
/// Default configuration file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Shader configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShaderConfig {
    /// Name of the effect drawn behind the editor
    #[serde(default = "default_background_effect")]
    pub background_effect: String,
}

fn default_background_effect() -> String {
    "greyWave".to_string()
}

impl Default for ShaderConfig {
    fn default() -> Self {
        Self {
            background_effect: default_background_effect(),
        }
    }
}

/// Tutorial configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorialConfig {
    /// Catalog file used instead of the bundled one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Directory holding the per-topic image folders
    #[serde(default = "default_asset_root")]
    pub asset_root: PathBuf,

    /// Image file extension
    #[serde(default = "default_image_extension")]
    pub image_extension: String,
}

fn default_asset_root() -> PathBuf {
    PathBuf::from(DEFAULT_ASSET_ROOT)
}

fn default_image_extension() -> String {
    DEFAULT_IMAGE_EXTENSION.to_string()
}

impl Default for TutorialConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            asset_root: default_asset_root(),
            image_extension: default_image_extension(),
        }
    }
}

impl TutorialConfig {
    /// Image layout described by this section
    pub fn asset_layout(&self) -> AssetLayout {
        AssetLayout::new(self.asset_root.clone(), &self.image_extension)
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Shader settings
    #[serde(default)]
    pub shaders: ShaderConfig,

    /// Tutorial settings
    #[serde(default)]
    pub tutorial: TutorialConfig,
}

impl Config {
    /// Load configuration from ~/.lumen/config.toml, using defaults if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            log::info!("Config file not found at {:?}, using defaults", config_path);
            return Ok(Self::default());
        }

        let config = Self::load_from(&config_path)?;
        log::info!("Loaded configuration from {:?}", config_path);
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e))?;

        let mut config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.to_path_buf(), e))?;

        // Relative catalog paths are relative to the config file
        if let Some(catalog) = config.tutorial.catalog.as_mut() {
            if catalog.is_relative() {
                if let Some(dir) = path.parent() {
                    *catalog = dir.join(&*catalog);
                }
            }
        }

        Ok(config)
    }

    /// Serialize the configuration to TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::SerializeError)
    }

    /// Get the configuration directory path (~/.lumen/)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
        Ok(home.join(CONFIG_DIR_NAME))
    }

    /// Get the configuration file path (~/.lumen/config.toml)
    pub fn config_file_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }
}

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
    /// Home directory not found
    NoHomeDirectory,
    /// Failed to read config file
    ReadError(PathBuf, std::io::Error),
    /// Failed to parse config file
    ParseError(PathBuf, toml::de::Error),
    /// Failed to serialize config
    SerializeError(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoHomeDirectory => write!(f, "Could not determine home directory"),
            ConfigError::ReadError(path, e) => write!(f, "Failed to read {:?}: {}", path, e),
            ConfigError::ParseError(path, e) => write!(f, "Failed to parse {:?}: {}", path, e),
            ConfigError::SerializeError(e) => write!(f, "Failed to serialize config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::NoHomeDirectory => None,
            ConfigError::ReadError(_, e) => Some(e),
            ConfigError::ParseError(_, e) => Some(e),
            ConfigError::SerializeError(e) => Some(e),
        }
    }
}
