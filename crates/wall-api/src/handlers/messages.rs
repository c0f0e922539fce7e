//! Message handlers
//!
//! Endpoints for submitting reflections and reading the live set.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use wall_service::{
    MessageResponse, SubmissionReceiptResponse, SubmissionService, SubmitMessageRequest,
};

use crate::extractors::{AuthIdentity, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Default page size: the input view's ten-most-recent feed
const DEFAULT_LIMIT: i64 = 10;

/// Query parameters for listing messages
#[derive(Debug, Deserialize)]
pub struct ListMessagesQuery {
    /// Newest-first cap; the display wall asks for its render cap here
    pub limit: Option<i64>,
}

/// List the newest messages
///
/// GET /messages
pub async fn get_messages(
    State(state): State<AppState>,
    Query(query): Query<ListMessagesQuery>,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let service = SubmissionService::new(state.service_context());
    let messages = service
        .recent_messages(query.limit.unwrap_or(DEFAULT_LIMIT))
        .await?;
    Ok(Json(messages))
}

/// Submit a reflection
///
/// POST /messages
pub async fn submit_message(
    State(state): State<AppState>,
    identity: AuthIdentity,
    ValidatedJson(request): ValidatedJson<SubmitMessageRequest>,
) -> ApiResult<Created<Json<SubmissionReceiptResponse>>> {
    let service = SubmissionService::new(state.service_context());
    let receipt = service.submit(identity.identity_id, &request.text).await?;

    let response = SubmissionReceiptResponse {
        id: receipt.message.id,
        text: receipt.message.text.clone(),
        scores: receipt.message.scores,
        degraded: receipt.degraded,
    };

    Ok(Created(Json(response)))
}
