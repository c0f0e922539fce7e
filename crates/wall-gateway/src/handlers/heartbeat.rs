//! Heartbeat handler (op 1)

use std::sync::Arc;

use super::HandlerResult;
use crate::connection::Connection;
use crate::protocol::{CloseCode, GatewayMessage};

/// Handles Heartbeat messages
pub struct HeartbeatHandler;

impl HeartbeatHandler {
    /// Record the heartbeat and acknowledge it
    pub async fn handle(
        connection: &Arc<Connection>,
        last_seq: Option<u64>,
    ) -> HandlerResult<Option<CloseCode>> {
        connection.record_heartbeat().await;

        tracing::trace!(
            session_id = %connection.session_id(),
            last_seq = ?last_seq,
            "Heartbeat received"
        );

        connection
            .send(GatewayMessage::heartbeat_ack())
            .await
            .map_err(|e| super::HandlerError::Internal(format!("Failed to send ACK: {e}")))?;

        Ok(None)
    }
}
