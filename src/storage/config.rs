//! Configuration management
//!
//! Settings for the command-line front end, stored in
//! `~/.config/staff-shared/config.toml`.
//! Placeholder priority: config.toml > STAFF_SHARED_PLACEHOLDER > `:id`

use super::Result;
use crate::error::{ConfigError, StorageError};
use crate::upload::UploadLimits;
use crate::utils::env::get_env;
use crate::utils::path::PLACEHOLDER;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const PLACEHOLDER_ENV: &str = "STAFF_SHARED_PLACEHOLDER";

/// Application configuration
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Token substituted for numeric path segments
    pub placeholder: Option<String>,
    pub max_upload_bytes: Option<u64>,
    pub allowed_extensions: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: format!("Failed to parse config file: {}", e),
            })?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| StorageError::ConfigParseError {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(StorageError::ConfigDirNotFound)?;

        Ok(home_dir
            .join(".config")
            .join("staff-shared")
            .join("config.toml"))
    }

    /// Placeholder with fallback to environment variable, then `:id`
    pub fn placeholder(&self) -> String {
        self.placeholder
            .clone()
            .filter(|p| !p.is_empty())
            .or_else(|| get_env(PLACEHOLDER_ENV).ok())
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    pub fn upload_limits(&self) -> UploadLimits {
        let defaults = UploadLimits::default();
        UploadLimits {
            max_bytes: self.max_upload_bytes.unwrap_or(defaults.max_bytes),
            allowed_extensions: self
                .allowed_extensions
                .clone()
                .unwrap_or(defaults.allowed_extensions),
        }
    }

    /// Set a value by key, as given on the command line
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), ConfigError> {
        match key {
            "placeholder" => {
                if value.is_empty() || value.contains('/') {
                    return Err(ConfigError::InvalidValue {
                        field: key.to_string(),
                        value: value.to_string(),
                        reason: "placeholder must be non-empty and contain no '/'".to_string(),
                    });
                }
                self.placeholder = Some(value.to_string());
            }
            "max_upload_bytes" => {
                let bytes = value.parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                    field: key.to_string(),
                    value: value.to_string(),
                    reason: e.to_string(),
                })?;
                self.max_upload_bytes = Some(bytes);
            }
            "allowed_extensions" => {
                let extensions: Vec<String> = value
                    .split(',')
                    .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
                    .filter(|ext| !ext.is_empty())
                    .collect();
                if extensions.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        field: key.to_string(),
                        value: value.to_string(),
                        reason: "at least one extension is required".to_string(),
                    });
                }
                self.allowed_extensions = Some(extensions);
            }
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: key.to_string(),
                });
            }
        }
        Ok(())
    }
}
