//! Route definitions
//!
//! All API routes organized by view surface and mounted under /api/v1.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{admin, health, identity, likes, messages, settings};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately, outside the versioned API)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(wall_routes())
        .merge(admin_routes())
}

/// Routes shared by the visitor input and display views
fn wall_routes() -> Router<AppState> {
    Router::new()
        // Anonymous identity bootstrap
        .route("/identity", post(identity::create_identity))
        // Live copy document
        .route("/settings", get(settings::get_settings))
        // Message set
        .route("/messages", get(messages::get_messages))
        .route("/messages", post(messages::submit_message))
        // Likes
        .route("/messages/:message_id/like", post(likes::toggle_like))
        .route("/likes/@me", get(likes::get_my_likes))
}

/// Admin panel routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/settings", put(admin::update_settings))
        .route("/admin/messages/:message_id", delete(admin::delete_message))
        .route("/admin/messages/clear", post(admin::clear_messages))
        .route("/admin/export", get(admin::export_csv))
        .route("/admin/mood", get(admin::mood_summary))
}
