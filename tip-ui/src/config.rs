//! Configuration file loading.
//!
//! Configuration is read from `tip-time/config.toml` under the platform
//! config directory (`~/.config` on Linux), or from an explicit path.
//! Every key is optional; command line flags take precedence.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tip_core::CurrencyLocale;
use tracing::debug;

/// Errors that can occur while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings read from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct TipTimeConfig {
    /// Locale for currency formatting (e.g. "en-US", "de-DE").
    pub locale: Option<CurrencyLocale>,
    /// Tip percentage pre-filled into the tip field.
    pub default_tip_percent: Option<Decimal>,
    /// Initial position of the round-up switch.
    pub round_up: Option<bool>,
    /// Log filter directive (e.g. "debug", "tip_ui=trace").
    pub log_level: Option<String>,
    /// File that log records are appended to.
    pub log_file: Option<PathBuf>,
}

impl TipTimeConfig {
    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tip-time"))
    }

    /// Returns the full path to the default config file.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(
        content: &str,
        path: &Path,
    ) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads configuration from `path`. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content, path)?;
        debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Loads the default config file. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read or
    /// parsed. The caller decides whether to fall back to the defaults.
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            Some(path) => {
                debug!("no config file at {}", path.display());
                Ok(Self::default())
            }
            None => {
                debug!("could not determine config directory");
                Ok(Self::default())
            }
        }
    }

    /// Text the tip field starts with; empty when no default is configured.
    pub fn initial_tip_text(&self) -> String {
        self.default_tip_percent
            .map(|percent| percent.normalize().to_string())
            .unwrap_or_default()
    }
}
