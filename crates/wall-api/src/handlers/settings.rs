//! Settings handlers
//!
//! The input and display views read the live settings document here.

use axum::{extract::State, Json};
use wall_core::entities::WallSettings;
use wall_service::SettingsService;

use crate::response::ApiResult;
use crate::state::AppState;

/// Get the current settings document
///
/// GET /settings
pub async fn get_settings(State(state): State<AppState>) -> ApiResult<Json<WallSettings>> {
    let service = SettingsService::new(state.service_context());
    let settings = service.get().await?;
    Ok(Json(settings))
}
