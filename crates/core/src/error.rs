//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Both variants are client-facing: the payload is the human-readable detail
/// returned to the caller unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The referenced activity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Membership state contradicts the requested mutation.
    #[error("{0}")]
    Conflict(String),
}

impl DomainError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Human-readable detail carried by the error.
    pub fn detail(&self) -> &str {
        match self {
            Self::NotFound(msg) | Self::Conflict(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_bare_detail() {
        let err = DomainError::not_found("Activity not found");
        assert_eq!(err.to_string(), "Activity not found");
        assert_eq!(err.detail(), "Activity not found");
    }

    #[test]
    fn conflict_keeps_its_message() {
        let err = DomainError::conflict("Student is already signed up");
        assert!(matches!(err, DomainError::Conflict(ref m) if m == "Student is already signed up"));
    }
}
