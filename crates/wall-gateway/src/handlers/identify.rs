//! Identify handler (op 2)
//!
//! Resolves the identity token (the display role may stay anonymous),
//! attaches the connection to its streams, and sends the READY snapshot
//! so the view renders without a second round-trip.

use std::sync::Arc;

use wall_service::{LikeService, SettingsService, SubmissionService};

use super::{HandlerError, HandlerResult};
use crate::connection::{Connection, ConnectionState};
use crate::events::{ReadyPayload, WallEventType};
use crate::protocol::{CloseCode, GatewayMessage, IdentifyPayload, ViewRole};
use crate::server::GatewayState;

/// READY snapshot cap for the visitor input view (ten most recent)
const INPUT_SNAPSHOT_LIMIT: i64 = 10;
/// READY snapshot cap for the display wall (concurrent card cap)
const DISPLAY_SNAPSHOT_LIMIT: i64 = 16;
/// READY snapshot cap for the admin panel
const ADMIN_SNAPSHOT_LIMIT: i64 = 100;

/// Handles Identify messages
pub struct IdentifyHandler;

impl IdentifyHandler {
    /// Handle an Identify message
    pub async fn handle(
        state: &GatewayState,
        connection: &Arc<Connection>,
        payload: IdentifyPayload,
    ) -> HandlerResult<Option<CloseCode>> {
        // Check if already identified
        if connection.is_identified().await {
            tracing::warn!(
                session_id = %connection.session_id(),
                "Client sent Identify while already identified"
            );
            return Ok(Some(CloseCode::AlreadyAuthenticated));
        }

        let view = ViewRole::parse(payload.view.as_deref());

        // Resolve the identity. Tokens arrive with or without the Bearer
        // prefix; the display wall may omit one entirely.
        let identity_id = match payload.token.as_deref() {
            Some(raw) => {
                let token = raw.strip_prefix("Bearer ").unwrap_or(raw);
                let claims = state
                    .service_context()
                    .identity_service()
                    .verify(token)
                    .map_err(|e| {
                        tracing::debug!(error = %e, "Token validation failed");
                        HandlerError::AuthenticationFailed(e.to_string())
                    })?;
                Some(
                    claims
                        .identity_id()
                        .map_err(|e| HandlerError::AuthenticationFailed(e.to_string()))?,
                )
            }
            None if view.allows_anonymous() => None,
            None => {
                return Err(HandlerError::AuthenticationFailed(
                    "Identity token required for this view".to_string(),
                ))
            }
        };

        let session_id = connection.session_id().to_string();
        connection.set_view(view).await;
        connection.set_state(ConnectionState::Connected).await;

        // Attach the identity's private like stream
        if let Some(identity_id) = identity_id {
            state
                .connection_manager()
                .identify_connection(&session_id, identity_id)
                .await;
            state
                .event_dispatcher()
                .subscribe_identity(identity_id)
                .await
                .ok();
        }

        // Build the READY snapshot
        let ctx = state.service_context();
        let settings = SettingsService::new(ctx).get().await?;
        let snapshot_limit = match view {
            ViewRole::Input => INPUT_SNAPSHOT_LIMIT,
            ViewRole::Display => DISPLAY_SNAPSHOT_LIMIT,
            ViewRole::Admin => ADMIN_SNAPSHOT_LIMIT,
        };
        let messages = SubmissionService::new(ctx)
            .recent_messages(snapshot_limit)
            .await?;
        let liked_message_ids = match identity_id {
            Some(id) => LikeService::new(ctx).liked_message_ids(id).await?,
            None => Vec::new(),
        };

        let ready = ReadyPayload {
            v: 1,
            session_id: session_id.clone(),
            view,
            identity_id,
            settings,
            messages,
            liked_message_ids,
        };

        let ready_data = serde_json::to_value(&ready).unwrap_or_default();
        let seq = connection.next_sequence();

        connection
            .send(GatewayMessage::dispatch(
                WallEventType::Ready.as_str(),
                seq,
                ready_data,
            ))
            .await
            .map_err(|e| HandlerError::Internal(format!("Failed to send READY: {e}")))?;

        tracing::info!(
            session_id = %session_id,
            identity_id = ?identity_id,
            view = view.as_str(),
            "Client identified"
        );

        Ok(None)
    }
}
