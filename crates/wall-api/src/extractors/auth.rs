//! Identity extractor
//!
//! Extracts and validates the anonymous identity token from the
//! Authorization header. Every write path requires a resolved identity;
//! without one those endpoints are simply unusable.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use wall_core::Snowflake;

use crate::response::ApiError;
use crate::state::AppState;

/// Resolved anonymous identity extracted from the bearer token
#[derive(Debug, Clone)]
pub struct AuthIdentity {
    /// Identity id from the token
    pub identity_id: Snowflake,
}

impl AuthIdentity {
    /// Create a new AuthIdentity
    pub fn new(identity_id: Snowflake) -> Self {
        Self { identity_id }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthIdentity
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        // Get the app state to access the identity service
        let app_state = AppState::from_ref(state);

        // Validate the token
        let claims = app_state
            .identity_service()
            .verify(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid identity token");
                ApiError::InvalidAuthFormat
            })?;

        // Extract identity id from claims
        let identity_id = claims.identity_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid identity id in token");
            ApiError::InvalidAuthFormat
        })?;

        Ok(AuthIdentity::new(identity_id))
    }
}
