use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::pegs::MAX_DISKS;

/// Command-line defaults and limits, loadable from TOML.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Largest disk count the CLI will solve; move count grows as `2^n`.
    pub max_disks: usize,
    pub default_disks: usize,
    pub default_pegs: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            max_disks: 20,
            default_disks: 5,
            default_pegs: 3,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_disks > MAX_DISKS {
            return Err(ConfigError::Validation(format!(
                "max_disks must be <= {MAX_DISKS}"
            )));
        }
        if self.default_disks > self.max_disks {
            return Err(ConfigError::Validation(
                "default_disks must be <= max_disks".into(),
            ));
        }
        if !(3..=4).contains(&self.default_pegs) {
            return Err(ConfigError::Validation(
                "default_pegs must be 3 or 4".into(),
            ));
        }
        Ok(())
    }

    /// Checks a requested disk count against `max_disks`.
    pub fn check_disks(&self, disks: usize) -> Result<(), ConfigError> {
        if disks > self.max_disks {
            return Err(ConfigError::Validation(format!(
                "{disks} disks exceeds max_disks ({})",
                self.max_disks
            )));
        }
        Ok(())
    }
}
