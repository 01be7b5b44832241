//! Repository implementations for the roster tables
//!
//! Each repository wraps the shared pool and exposes one method per query.
//! Methods return row structs from `crate::models`; callers convert them into
//! `roster_kernel` types when they need domain behaviour.

pub mod users;
pub mod teams;
pub mod team_members;

pub use users::UserRepository;
pub use teams::TeamRepository;
pub use team_members::TeamMemberRepository;
