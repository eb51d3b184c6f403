use std::path::{Path, PathBuf};

use lantern_accounts::config::CreationConfig;
use serde::{Deserialize, Serialize};

use crate::error::WalletError;

/// Wallet configuration, read from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalletConfig {
    /// Directory holding `accounts.json`. Defaults to `~/.lantern/accounts`.
    #[serde(default)]
    pub data_dir: Option<String>,
    #[serde(default)]
    pub naming: CreationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl WalletConfig {
    /// Root of all wallet state (`~/.lantern`).
    pub fn home_dir() -> Result<PathBuf, WalletError> {
        let home = dirs::home_dir().ok_or_else(|| {
            WalletError::ConfigError("could not determine home directory".to_string())
        })?;
        Ok(home.join(".lantern"))
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, WalletError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            WalletError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&contents).map_err(|e| {
            WalletError::ConfigError(format!(
                "failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load `explicit` if given, else `~/.lantern/config.toml` if present, else defaults.
    pub fn resolve(explicit: Option<&str>) -> Result<Self, WalletError> {
        if let Some(path) = explicit {
            return Self::load(Path::new(path));
        }
        let default_path = Self::home_dir()?.join("config.toml");
        if default_path.exists() {
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Accounts directory: `override_dir`, then `data_dir`, then `~/.lantern/accounts`.
    pub fn accounts_dir(&self, override_dir: Option<&str>) -> Result<PathBuf, WalletError> {
        match override_dir.or(self.data_dir.as_deref()) {
            Some(dir) => Ok(PathBuf::from(dir)),
            None => Ok(Self::home_dir()?.join("accounts")),
        }
    }
}
