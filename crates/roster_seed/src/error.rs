//! Seeder start-up errors
//!
//! Database failures during a run are reported, not raised; these cover the
//! few things that stop the binary before or outside the run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid database settings: {0}")]
    Database(#[from] roster_db::DatabaseError),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
