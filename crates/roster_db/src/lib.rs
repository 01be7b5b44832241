//! Roster Database Layer
//!
//! This crate provides the data-access layer for the team roster seeder on
//! PostgreSQL using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: one repository per table, each
//! holding a clone of the shared pool and exposing one method per query.
//! Row structs in `models` map columns to typed fields and convert into the
//! `roster_kernel` domain types.
//!
//! # Example
//!
//! ```rust,ignore
//! use roster_db::{DatabaseConfig, create_pool, UserRepository};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/roster")).await?;
//! let users = UserRepository::new(pool).all().await?;
//! ```

pub mod pool;
pub mod error;
pub mod models;
pub mod query;
pub mod schema;
pub mod repositories;

pub use pool::{DatabasePool, DatabaseConfig, create_pool, create_lazy_pool, check_connection};
pub use error::DatabaseError;
pub use repositories::{UserRepository, TeamRepository, TeamMemberRepository};
