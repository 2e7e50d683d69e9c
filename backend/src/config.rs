//! Configuration management for the Mini ERP server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with ERP_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Stock level rules
    pub inventory: InventoryConfig,

    /// Note number series
    pub notes: NotesConfig,

    /// Mock data seeding
    pub seed: SeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InventoryConfig {
    /// Stock at or below this level is reported as low
    pub low_stock_threshold: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotesConfig {
    /// Prefix of purchase order note numbers
    pub purchase_prefix: String,

    /// Prefix of sales order note numbers
    pub sales_prefix: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    /// Load the demo catalog and orders at startup
    pub enabled: bool,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("ERP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default(
                "inventory.low_stock_threshold",
                i64::from(shared::DEFAULT_LOW_STOCK_THRESHOLD),
            )?
            .set_default("notes.purchase_prefix", "PO")?
            .set_default("notes.sales_prefix", "SO")?
            .set_default("seed.enabled", true)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (ERP_ prefix)
            .add_source(
                Environment::with_prefix("ERP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            inventory: InventoryConfig::default(),
            notes: NotesConfig::default(),
            seed: SeedConfig { enabled: true },
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: shared::DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            purchase_prefix: "PO".to_string(),
            sales_prefix: "SO".to_string(),
        }
    }
}
