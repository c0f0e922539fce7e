//! Identity handlers
//!
//! Anonymous identity bootstrap for all three views.

use axum::{extract::State, Json};
use wall_service::{IdentifyRequest, IdentityResponse};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Establish (or keep) an anonymous identity
///
/// POST /identity
pub async fn create_identity(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IdentifyRequest>,
) -> ApiResult<Json<IdentityResponse>> {
    let ctx = state.service_context();
    let token = ctx
        .identity_service()
        .adopt_or_issue(request.token.as_deref(), ctx.generate_id())?;

    Ok(Json(IdentityResponse::from(token)))
}
