//! Shared precondition checks used by every service
//!
//! All helpers fail with [`DomainError::InvalidArgument`] carrying the
//! caller-supplied message. They guard malformed input only; not-found is
//! never signalled through these.

use crate::domain::error::{DomainError, DomainResult};

/// Reject blank or empty text, returning the trimmed value.
pub fn require_non_blank(value: &str, message: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::invalid(message));
    }
    Ok(trimmed.to_string())
}

/// Reject negative numbers.
pub fn require_non_negative(value: i32, message: &str) -> DomainResult<i32> {
    if value < 0 {
        return Err(DomainError::invalid(message));
    }
    Ok(value)
}

/// Reject an absent required value (reference or date).
pub fn require_present<T>(value: Option<T>, message: &str) -> DomainResult<T> {
    value.ok_or_else(|| DomainError::invalid(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_non_blank_trims_and_accepts() {
        assert_eq!(
            require_non_blank("  Alice  ", "name required").unwrap(),
            "Alice"
        );
    }

    #[test]
    fn require_non_blank_rejects_whitespace_only() {
        let err = require_non_blank("   ", "name required").unwrap_err();
        assert_eq!(err, DomainError::invalid("name required"));
    }

    #[test]
    fn require_non_negative_accepts_zero() {
        assert_eq!(require_non_negative(0, "age").unwrap(), 0);
        assert!(require_non_negative(-1, "age").is_err());
    }

    #[test]
    fn require_present_rejects_none() {
        assert_eq!(require_present(Some(7), "missing").unwrap(), 7);
        assert!(require_present::<u32>(None, "missing").is_err());
    }
}
