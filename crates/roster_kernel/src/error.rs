//! Kernel error types

use thiserror::Error;

/// Errors raised by roster domain types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KernelError {
    #[error("Unknown member role: {0}")]
    UnknownRole(String),

    #[error("Invalid fixture: {0}")]
    InvalidFixture(String),
}

impl KernelError {
    pub fn unknown_role(role: impl Into<String>) -> Self {
        KernelError::UnknownRole(role.into())
    }

    pub fn invalid_fixture(message: impl Into<String>) -> Self {
        KernelError::InvalidFixture(message.into())
    }
}
