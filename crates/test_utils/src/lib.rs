//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the team roster workspace.
//!
//! # Modules
//!
//! - `database`: PostgreSQL testcontainer management and schema bootstrap
//! - `assertions`: Assertions over the seeded roster tables
//! - `generators`: Property-based test data generators

pub mod database;
pub mod assertions;
pub mod generators;

pub use database::*;
pub use assertions::*;
pub use generators::*;
