//! Configuration management for RentDesk

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Sqlite URL of the key-value store holding the record collections.
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SweepConfig {
    /// Interval between overdue sweeps.
    pub interval_hours: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    /// Seed demo users/equipment/rentals/maintenance into empty collections.
    pub demo_data: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub sweep: SweepConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default"))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix RENTDESK_)
            .add_source(
                Environment::with_prefix("RENTDESK")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override storage URL from DATABASE_URL env var if present
            .set_override_option("storage.url", env::var("DATABASE_URL").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://rentdesk.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self { interval_hours: 24 }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { demo_data: true }
    }
}
