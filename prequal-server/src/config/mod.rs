//! Configuration module for prequal-server.
//!
//! Handles loading configuration from the TOML file and CLI overrides, and
//! turns the merchant seeds into store records.

pub mod file;

use crate::config::file::{FileConfig, MerchantSeed};
use prequal_core::entities::merchant_configuration::MerchantConfiguration;
use std::collections::HashSet;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Loaded configuration result containing all parts.
#[derive(Debug)]
pub struct LoadedConfig {
    pub listen: SocketAddr,
    pub merchants: Vec<MerchantConfiguration>,
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: PathBuf,
    listen_override: Option<SocketAddr>,
}

impl ConfigLoader {
    /// Create a new config loader.
    pub fn new(config_path: impl AsRef<Path>, listen_override: Option<SocketAddr>) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            listen_override,
        }
    }

    /// Read the TOML file, apply CLI overrides and validate.
    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        let config_content = std::fs::read_to_string(&self.config_path)?;
        self.load_str(&config_content)
    }

    fn load_str(&self, config_content: &str) -> Result<LoadedConfig, ConfigError> {
        let mut file_config: FileConfig = toml::from_str(config_content)?;

        if let Some(listen) = self.listen_override {
            file_config.server.listen = listen;
        }

        validate(&file_config)?;

        Ok(LoadedConfig {
            listen: file_config.server.listen,
            merchants: file_config.merchants.into_iter().map(convert_merchant).collect(),
        })
    }
}

/// Merchant identifiers must be non-empty and unique. Seed bounds are not
/// checked; only updates are held to the min < max rule.
fn validate(config: &FileConfig) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for merchant in &config.merchants {
        if merchant.merchant_id.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "merchant {:?} has an empty merchant_id",
                merchant.name
            )));
        }
        if !seen.insert(merchant.merchant_id.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate merchant_id {}",
                merchant.merchant_id
            )));
        }
    }
    Ok(())
}

fn convert_merchant(m: MerchantSeed) -> MerchantConfiguration {
    MerchantConfiguration::new(
        m.merchant_id,
        m.name,
        m.minimum_loan_amount,
        m.maximum_loan_amount,
    )
    .with_prequal_enabled(m.prequal_enabled)
}
