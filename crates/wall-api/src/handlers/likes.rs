//! Like handlers

use axum::{
    extract::{Path, State},
    Json,
};
use wall_service::{LikeService, LikeToggleResponse, LikedMessagesResponse};

use crate::extractors::AuthIdentity;
use crate::response::{ApiResult, ApiError};
use crate::state::AppState;

/// Toggle the caller's like on a message
///
/// POST /messages/{message_id}/like
pub async fn toggle_like(
    State(state): State<AppState>,
    identity: AuthIdentity,
    Path(message_id): Path<String>,
) -> ApiResult<Json<LikeToggleResponse>> {
    let message_id = message_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid message_id format"))?;

    let service = LikeService::new(state.service_context());
    let toggle = service.toggle(message_id, identity.identity_id).await?;
    Ok(Json(LikeToggleResponse::from(toggle)))
}

/// List the message ids the caller has liked
///
/// GET /likes/@me
pub async fn get_my_likes(
    State(state): State<AppState>,
    identity: AuthIdentity,
) -> ApiResult<Json<LikedMessagesResponse>> {
    let service = LikeService::new(state.service_context());
    let message_ids = service.liked_message_ids(identity.identity_id).await?;
    Ok(Json(LikedMessagesResponse { message_ids }))
}
