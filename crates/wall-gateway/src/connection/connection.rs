//! Individual WebSocket connection
//!
//! Represents a single WebSocket connection and its state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{mpsc, RwLock};
use wall_core::Snowflake;

use crate::protocol::{GatewayMessage, ViewRole};

/// Connection state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Connection established, waiting for Identify
    Connecting,
    /// Successfully identified
    Connected,
    /// Connection is closed
    Disconnected,
}

/// A single WebSocket connection
pub struct Connection {
    /// Unique session ID
    session_id: String,

    /// Resolved identity (None until Identify; stays None for anonymous
    /// display connections)
    identity_id: RwLock<Option<Snowflake>>,

    /// Which view this connection renders
    view: RwLock<ViewRole>,

    /// Current connection state
    state: RwLock<ConnectionState>,

    /// Channel to send messages to the WebSocket
    sender: mpsc::Sender<GatewayMessage>,

    /// Last sequence number sent
    sequence: AtomicU64,

    /// Last heartbeat received
    last_heartbeat: RwLock<Instant>,

    /// Connection creation time
    created_at: Instant,
}

impl Connection {
    /// Create a new connection
    pub fn new(session_id: String, sender: mpsc::Sender<GatewayMessage>) -> Arc<Self> {
        Arc::new(Self {
            session_id,
            identity_id: RwLock::new(None),
            view: RwLock::new(ViewRole::default()),
            state: RwLock::new(ConnectionState::Connecting),
            sender,
            sequence: AtomicU64::new(0),
            last_heartbeat: RwLock::new(Instant::now()),
            created_at: Instant::now(),
        })
    }

    /// Get the session ID
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Get the identity (if resolved)
    pub async fn identity_id(&self) -> Option<Snowflake> {
        *self.identity_id.read().await
    }

    /// Set the identity (on successful Identify)
    pub async fn set_identity_id(&self, identity_id: Snowflake) {
        *self.identity_id.write().await = Some(identity_id);
    }

    /// Get the view role
    pub async fn view(&self) -> ViewRole {
        *self.view.read().await
    }

    /// Set the view role
    pub async fn set_view(&self, view: ViewRole) {
        *self.view.write().await = view;
    }

    /// Get the current state
    pub async fn state(&self) -> ConnectionState {
        *self.state.read().await
    }

    /// Set the connection state
    pub async fn set_state(&self, state: ConnectionState) {
        *self.state.write().await = state;
    }

    /// Check if the connection has completed Identify
    pub async fn is_identified(&self) -> bool {
        *self.state.read().await == ConnectionState::Connected
    }

    /// Get the next sequence number
    pub fn next_sequence(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Record a heartbeat received
    pub async fn record_heartbeat(&self) {
        *self.last_heartbeat.write().await = Instant::now();
    }

    /// Get time since last heartbeat
    pub async fn time_since_heartbeat(&self) -> std::time::Duration {
        self.last_heartbeat.read().await.elapsed()
    }

    /// Get connection age
    pub fn age(&self) -> std::time::Duration {
        self.created_at.elapsed()
    }

    /// Send a message to this connection
    pub async fn send(
        &self,
        message: GatewayMessage,
    ) -> Result<(), mpsc::error::SendError<GatewayMessage>> {
        self.sender.send(message).await
    }

    /// Try to send a message (non-blocking)
    pub fn try_send(
        &self,
        message: GatewayMessage,
    ) -> Result<(), mpsc::error::TrySendError<GatewayMessage>> {
        self.sender.try_send(message)
    }

    /// Check if the sender channel is closed
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("session_id", &self.session_id)
            .field("sequence", &self.sequence.load(Ordering::SeqCst))
            .field("created_at", &self.created_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connection_creation() {
        let (tx, _rx) = mpsc::channel(10);
        let conn = Connection::new("session123".to_string(), tx);

        assert_eq!(conn.session_id(), "session123");
        assert!(conn.identity_id().await.is_none());
        assert_eq!(conn.state().await, ConnectionState::Connecting);
        assert!(!conn.is_identified().await);
    }

    #[tokio::test]
    async fn test_connection_identify() {
        let (tx, _rx) = mpsc::channel(10);
        let conn = Connection::new("session123".to_string(), tx);

        let identity = Snowflake::from(12345i64);
        conn.set_identity_id(identity).await;
        conn.set_view(ViewRole::Input).await;
        conn.set_state(ConnectionState::Connected).await;

        assert!(conn.is_identified().await);
        assert_eq!(conn.identity_id().await, Some(identity));
        assert_eq!(conn.view().await, ViewRole::Input);
    }

    #[tokio::test]
    async fn test_anonymous_display_connection_is_identified() {
        let (tx, _rx) = mpsc::channel(10);
        let conn = Connection::new("session123".to_string(), tx);

        // Display wall connects without an identity
        conn.set_state(ConnectionState::Connected).await;

        assert!(conn.is_identified().await);
        assert!(conn.identity_id().await.is_none());
    }

    #[tokio::test]
    async fn test_connection_sequence() {
        let (tx, _rx) = mpsc::channel(10);
        let conn = Connection::new("session123".to_string(), tx);

        assert_eq!(conn.next_sequence(), 1);
        assert_eq!(conn.next_sequence(), 2);
    }
}
