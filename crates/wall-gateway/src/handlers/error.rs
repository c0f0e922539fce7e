//! Handler error types

use thiserror::Error;
use wall_core::DomainError;
use wall_service::ServiceError;

use crate::protocol::CloseCode;

/// Errors raised while handling client frames
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Already authenticated")]
    AlreadyAuthenticated,

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl HandlerError {
    /// The close code this error maps to
    #[must_use]
    pub fn close_code(&self) -> CloseCode {
        match self {
            Self::AuthenticationFailed(_) => CloseCode::AuthenticationFailed,
            Self::NotAuthenticated => CloseCode::NotAuthenticated,
            Self::AlreadyAuthenticated => CloseCode::AlreadyAuthenticated,
            Self::Domain(_) | Self::Service(_) | Self::Internal(_) => CloseCode::UnknownError,
        }
    }
}

/// Result type for handlers
pub type HandlerResult<T> = Result<T, HandlerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_code_mapping() {
        assert_eq!(
            HandlerError::AuthenticationFailed("bad token".to_string()).close_code(),
            CloseCode::AuthenticationFailed
        );
        assert_eq!(
            HandlerError::AlreadyAuthenticated.close_code(),
            CloseCode::AlreadyAuthenticated
        );
        assert_eq!(
            HandlerError::Internal("boom".to_string()).close_code(),
            CloseCode::UnknownError
        );
    }
}
