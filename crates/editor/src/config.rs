//! Editor configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CATALOGO_DATA_DIR` - Directory holding the catalog slot (default: `.catalogo`)
//! - `CATALOGO_STORAGE_KEY` - Name of the catalog slot (default: `catalogo_pro_data_v4`)
//! - `CATALOGO_CHAT_BASE_URL` - Deep-link base for inquiries (default: `https://wa.me`)
//! - `CATALOGO_ADMIN_TAPS` - Logo taps that toggle admin mode (default: 5)

use std::path::PathBuf;

use thiserror::Error;

use crate::admin::DEFAULT_TAPS_REQUIRED;
use crate::links::DEFAULT_CHAT_BASE_URL;
use crate::storage::validate_key;
use crate::store::DEFAULT_STORAGE_KEY;

const DEFAULT_DATA_DIR: &str = ".catalogo";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Editor configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Directory holding the catalog slot
    pub data_dir: PathBuf,
    /// Slot name the catalog is stored under
    pub storage_key: String,
    /// Base URL for inquiry deep links
    pub chat_base_url: String,
    /// Consecutive logo taps that toggle admin mode
    pub admin_taps: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            chat_base_url: DEFAULT_CHAT_BASE_URL.to_owned(),
            admin_taps: DEFAULT_TAPS_REQUIRED,
        }
    }
}

impl EditorConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let data_dir = lookup("CATALOGO_DATA_DIR").map_or(defaults.data_dir, PathBuf::from);

        let storage_key = lookup("CATALOGO_STORAGE_KEY").unwrap_or(defaults.storage_key);
        validate_key(&storage_key).map_err(|e| {
            ConfigError::InvalidEnvVar("CATALOGO_STORAGE_KEY".to_string(), e.to_string())
        })?;

        let chat_base_url = lookup("CATALOGO_CHAT_BASE_URL").unwrap_or(defaults.chat_base_url);
        if !(chat_base_url.starts_with("https://") || chat_base_url.starts_with("http://")) {
            return Err(ConfigError::InvalidEnvVar(
                "CATALOGO_CHAT_BASE_URL".to_string(),
                "must start with http:// or https://".to_string(),
            ));
        }

        let admin_taps = match lookup("CATALOGO_ADMIN_TAPS") {
            Some(raw) => parse_taps(&raw)?,
            None => defaults.admin_taps,
        };

        Ok(Self {
            data_dir,
            storage_key,
            chat_base_url,
            admin_taps,
        })
    }

    /// Replace the data directory, e.g. from a command-line flag.
    #[must_use]
    pub fn with_data_dir(self, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..self
        }
    }
}

fn parse_taps(raw: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar("CATALOGO_ADMIN_TAPS".to_string(), reason);
    let taps = raw.trim().parse::<u32>().map_err(|e| invalid(e.to_string()))?;
    if taps == 0 {
        return Err(invalid("must be at least 1".to_string()));
    }
    Ok(taps)
}
