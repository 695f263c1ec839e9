//! TOML file configuration structures.
//!
//! These structs directly map to the `prequal-config.toml` file format.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub merchants: Vec<MerchantSeed>,
}

/// Server configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The address and port to listen on (e.g., "0.0.0.0:8080").
    #[serde(default = "default_listen_addr")]
    pub listen: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen_addr(),
        }
    }
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

/// A merchant record seeded into the store at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerchantSeed {
    pub merchant_id: String,
    /// Human-readable storefront name.
    pub name: String,
    pub minimum_loan_amount: Decimal,
    pub maximum_loan_amount: Decimal,
    #[serde(default)]
    pub prequal_enabled: bool,
}
