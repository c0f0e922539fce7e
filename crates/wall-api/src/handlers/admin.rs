//! Admin panel handlers
//!
//! Staff operations: settings overwrite, message deletion, bulk clear,
//! CSV export, and the aggregate mood distribution. Interactive
//! confirmation for the destructive calls is the panel's concern; these
//! endpoints are the destructive acts themselves.

use axum::{
    extract::{Path, State},
    Json,
};
use wall_core::entities::WallSettings;
use wall_service::{
    AdminService, ClearedResponse, MoodSummaryResponse, SettingsService, UpdateSettingsRequest,
};

use crate::extractors::{AuthIdentity, ValidatedJson};
use crate::response::{ApiError, ApiResult, CsvFile, NoContent};
use crate::state::AppState;

/// Overwrite the whole settings document
///
/// PUT /admin/settings
pub async fn update_settings(
    State(state): State<AppState>,
    _identity: AuthIdentity,
    ValidatedJson(request): ValidatedJson<UpdateSettingsRequest>,
) -> ApiResult<Json<WallSettings>> {
    let service = SettingsService::new(state.service_context());
    let settings = service.overwrite(WallSettings::from(request)).await?;
    Ok(Json(settings))
}

/// Delete one message
///
/// DELETE /admin/messages/{message_id}
pub async fn delete_message(
    State(state): State<AppState>,
    _identity: AuthIdentity,
    Path(message_id): Path<String>,
) -> ApiResult<NoContent> {
    let message_id = message_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid message_id format"))?;

    let service = AdminService::new(state.service_context());
    service.delete_message(message_id).await?;
    Ok(NoContent)
}

/// Delete every message in one batch
///
/// POST /admin/messages/clear
pub async fn clear_messages(
    State(state): State<AppState>,
    _identity: AuthIdentity,
) -> ApiResult<Json<ClearedResponse>> {
    let service = AdminService::new(state.service_context());
    let deleted = service.clear_all().await?;
    Ok(Json(ClearedResponse { deleted }))
}

/// Download the message set as CSV
///
/// GET /admin/export
pub async fn export_csv(
    State(state): State<AppState>,
    _identity: AuthIdentity,
) -> ApiResult<CsvFile> {
    let service = AdminService::new(state.service_context());
    let csv = service.export_csv().await?;
    Ok(CsvFile::new("wall-export.csv", csv))
}

/// Aggregate mood distribution across all current messages
///
/// GET /admin/mood
pub async fn mood_summary(
    State(state): State<AppState>,
    _identity: AuthIdentity,
) -> ApiResult<Json<MoodSummaryResponse>> {
    let service = AdminService::new(state.service_context());
    let summary = service.mood_summary().await?;
    Ok(Json(MoodSummaryResponse::from(summary)))
}
