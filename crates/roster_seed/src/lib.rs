//! Roster Seed - fixture loader and report for the team roster tables
//!
//! The `roster-seed` binary resets the `users`, `teams`, and `team_member`
//! tables to a fixed fixture and prints five read-back reports. The pieces
//! are exposed here so tests can drive a run against any pool and capture
//! the report.
//!
//! # Example
//!
//! ```rust,ignore
//! use roster_seed::Seeder;
//!
//! let summary = Seeder::new(pool).run(std::io::stdout().lock()).await?;
//! ```

pub mod config;
pub mod report;
pub mod procedure;
pub mod error;

pub use config::SeedConfig;
pub use procedure::{RunSummary, Seeder, StepFailure};
pub use error::SeedError;
