//! Roster Kernel - Domain types for the team roster seeder
//!
//! This crate provides the building blocks shared by the data-access layer
//! and the seeding binary:
//! - Integer identifiers for users and teams
//! - The `User`, `Team`, and `TeamMember` entities plus the joined projection
//! - The fixed fixture set the seeder writes on every run

pub mod identifiers;
pub mod model;
pub mod fixtures;
pub mod error;

pub use identifiers::{UserId, TeamId};
pub use model::{User, Team, TeamMember, MemberWithUser, MemberRole};
pub use fixtures::FixtureSet;
pub use error::KernelError;
