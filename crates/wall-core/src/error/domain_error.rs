//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Message not found: {0}")]
    MessageNotFound(Snowflake),

    #[error("Identity not found: {0}")]
    IdentityNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Message text is empty")]
    EmptyMessage,

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Score for axis {axis} must be non-negative")]
    NegativeScore { axis: &'static str },

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Like counter for message {0} would go negative")]
    LikeUnderflow(Snowflake),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",
            Self::IdentityNotFound(_) => "UNKNOWN_IDENTITY",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::EmptyMessage => "EMPTY_MESSAGE",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::NegativeScore { .. } => "NEGATIVE_SCORE",
            Self::LikeUnderflow(_) => "LIKE_UNDERFLOW",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::MessageNotFound(_) | Self::IdentityNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::EmptyMessage
                | Self::ContentTooLong { .. }
                | Self::NegativeScore { .. }
        )
    }

    /// Check if this is a conflict with current store state
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::LikeUnderflow(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::MessageNotFound(Snowflake::new(1));
        assert_eq!(err.code(), "UNKNOWN_MESSAGE");

        let err = DomainError::LikeUnderflow(Snowflake::new(1));
        assert_eq!(err.code(), "LIKE_UNDERFLOW");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::MessageNotFound(Snowflake::new(1)).is_not_found());
        assert!(!DomainError::EmptyMessage.is_not_found());
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::EmptyMessage.is_validation());
        assert!(DomainError::ContentTooLong { max: 150 }.is_validation());
        assert!(!DomainError::LikeUnderflow(Snowflake::new(1)).is_validation());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::MessageNotFound(Snowflake::new(123));
        assert_eq!(err.to_string(), "Message not found: 123");

        let err = DomainError::ContentTooLong { max: 150 };
        assert_eq!(err.to_string(), "Content too long: max 150 characters");
    }
}
