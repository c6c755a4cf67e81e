//! Configuration management for transaction signing

use gridway_types::SignMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("toml parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// A value failed validation
    #[error("invalid configuration: {0}")]
    InvalidValue(String),
}

/// Signing configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningConfig {
    #[serde(default)]
    pub chain: ChainConfig,
    #[serde(default)]
    pub signing: SignModeConfig,
}

/// Chain the transactions are signed for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Chain ID bound into every signature
    pub id: String,
    /// Longest chain ID accepted
    pub max_id_length: usize,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            id: "gridway-mainnet".to_string(),
            max_id_length: 48,
        }
    }
}

/// Sign mode policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignModeConfig {
    /// Mode used by the coordinator
    pub default_mode: SignMode,
    /// Modes the handler map accepts
    pub enabled_modes: Vec<SignMode>,
    /// Verify every signature right after producing it
    pub verify_signatures: bool,
}

impl Default for SignModeConfig {
    fn default() -> Self {
        Self {
            default_mode: SignMode::Direct,
            enabled_modes: vec![SignMode::Direct, SignMode::LegacyAminoJson],
            verify_signatures: true,
        }
    }
}

impl SigningConfig {
    /// Load from the default location, falling back to defaults when the
    /// file does not exist
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_config_file();
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            debug!(path = %path.display(), "no signing config found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: SigningConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get default configuration directory
    pub fn default_config_dir() -> PathBuf {
        if let Some(home) = dirs::home_dir() {
            home.join(".gridway")
        } else {
            PathBuf::from(".gridway")
        }
    }

    /// Get default configuration file path
    pub fn default_config_file() -> PathBuf {
        Self::default_config_dir().join("signing.toml")
    }

    pub fn chain_id(&self) -> &str {
        &self.chain.id
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chain.id.is_empty() {
            return Err(ConfigError::InvalidValue("chain id cannot be empty".into()));
        }
        if self.chain.id.len() > self.chain.max_id_length {
            return Err(ConfigError::InvalidValue(format!(
                "chain id is {} bytes, at most {} allowed",
                self.chain.id.len(),
                self.chain.max_id_length
            )));
        }

        let modes = &self.signing.enabled_modes;
        if modes.is_empty() {
            return Err(ConfigError::InvalidValue(
                "at least one sign mode must be enabled".into(),
            ));
        }
        if let Some(mode) = modes
            .iter()
            .find(|m| !matches!(m, SignMode::Direct | SignMode::LegacyAminoJson))
        {
            return Err(ConfigError::InvalidValue(format!(
                "sign mode {mode} is not supported"
            )));
        }
        if !modes.contains(&self.signing.default_mode) {
            return Err(ConfigError::InvalidValue(format!(
                "default sign mode {} is not enabled",
                self.signing.default_mode
            )));
        }
        Ok(())
    }
}
