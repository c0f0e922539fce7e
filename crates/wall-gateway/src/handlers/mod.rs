//! Client message handlers

pub mod error;
pub mod heartbeat;
pub mod identify;

pub use error::{HandlerError, HandlerResult};

use std::sync::Arc;

use crate::connection::Connection;
use crate::protocol::{CloseCode, GatewayMessage, OpCode};
use crate::server::GatewayState;

/// Routes parsed client frames to their handlers
pub struct MessageDispatcher;

impl MessageDispatcher {
    /// Handle one client frame; a returned close code ends the connection
    pub async fn handle(
        state: &GatewayState,
        connection: &Arc<Connection>,
        message: GatewayMessage,
    ) -> Option<CloseCode> {
        if !message.is_valid_client_message() {
            return Some(CloseCode::UnknownOpCode);
        }

        let result = match message.op {
            OpCode::Identify => match message.as_identify() {
                Some(payload) => identify::IdentifyHandler::handle(state, connection, payload).await,
                None => return Some(CloseCode::DecodeError),
            },
            OpCode::Heartbeat => {
                heartbeat::HeartbeatHandler::handle(connection, message.as_heartbeat_seq().flatten())
                    .await
            }
            _ => return Some(CloseCode::UnknownOpCode),
        };

        match result {
            Ok(close) => close,
            Err(e) => {
                tracing::warn!(
                    session_id = %connection.session_id(),
                    error = %e,
                    "Handler error"
                );
                Some(e.close_code())
            }
        }
    }
}
