//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violated preconditions on service inputs.
///
/// Not-found outcomes are not errors: services report those through
/// `bool`/`Option` return values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{message}")]
    InvalidArgument { message: String },
}

impl DomainError {
    /// Build an invalid-argument error from any displayable message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
