//! Seeder configuration

use roster_db::pool::{DEFAULT_ACQUIRE_TIMEOUT, DEFAULT_DATABASE_URL};
use roster_db::DatabaseConfig;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// Seeder configuration
///
/// Read from `SEED_`-prefixed environment variables. A plain `DATABASE_URL`
/// is honoured when `SEED_DATABASE_URL` is absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Database URL
    pub database_url: String,
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
    /// Pool ceiling
    pub max_connections: u32,
    /// Seconds each operation waits for a connection
    pub acquire_timeout_secs: u64,
    /// Create missing tables before seeding
    pub apply_schema: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            log_level: "info".to_string(),
            max_connections: 1,
            acquire_timeout_secs: DEFAULT_ACQUIRE_TIMEOUT.as_secs(),
            apply_schema: true,
        }
    }
}

impl SeedConfig {
    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_sources(std::env::var("DATABASE_URL").ok(), None)
    }

    /// Loads configuration from `SEED_` variables and a fallback URL
    ///
    /// `vars` replaces the process environment when given, which keeps tests
    /// independent of the machine they run on.
    pub fn from_sources(
        fallback_url: Option<String>,
        vars: Option<HashMap<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let database_url = fallback_url.unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        config::Config::builder()
            .set_default("database_url", database_url)?
            .add_source(
                config::Environment::with_prefix("SEED")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?
            .try_deserialize()
    }

    /// Pool settings derived from this configuration
    pub fn database(&self) -> DatabaseConfig {
        DatabaseConfig::new(&self.database_url)
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
    }
}
