//! Connection manager
//!
//! Tracks all active WebSocket connections using DashMap for thread-safe
//! access. The shared streams broadcast to every connection; like events
//! route through the identity index.

use dashmap::DashMap;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::mpsc;
use wall_core::Snowflake;

use super::Connection;
use crate::protocol::GatewayMessage;

/// Manages all active WebSocket connections
pub struct ConnectionManager {
    /// Active connections by session ID
    connections: DashMap<String, Arc<Connection>>,

    /// Identity to session IDs mapping (one device may hold several tabs)
    identity_connections: DashMap<Snowflake, HashSet<String>>,
}

impl ConnectionManager {
    /// Create a new connection manager
    #[must_use]
    pub fn new() -> Self {
        Self {
            connections: DashMap::new(),
            identity_connections: DashMap::new(),
        }
    }

    /// Create a new connection manager wrapped in Arc
    #[must_use]
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Register a new connection
    pub fn add_connection(
        &self,
        session_id: String,
        sender: mpsc::Sender<GatewayMessage>,
    ) -> Arc<Connection> {
        let connection = Connection::new(session_id.clone(), sender);
        self.connections.insert(session_id.clone(), connection.clone());

        tracing::debug!(session_id = %session_id, "Connection added");

        connection
    }

    /// Remove a connection; returns the identity it carried, if any, and
    /// whether that identity has no remaining sessions (so the dispatcher
    /// can drop its likes subscription).
    pub async fn remove_connection(&self, session_id: &str) -> Option<(Snowflake, bool)> {
        let (_, connection) = self.connections.remove(session_id)?;

        let identity_id = connection.identity_id().await?;

        // Atomically shrink the identity's session set
        self.identity_connections.alter(&identity_id, |_, mut sessions| {
            sessions.remove(session_id);
            sessions
        });

        let last_session = self
            .identity_connections
            .get(&identity_id)
            .map(|sessions| sessions.is_empty())
            .unwrap_or(true);
        if last_session {
            self.identity_connections.remove(&identity_id);
        }

        tracing::debug!(session_id = %session_id, "Connection removed");

        Some((identity_id, last_session))
    }

    /// Get a connection by session ID
    pub fn get_connection(&self, session_id: &str) -> Option<Arc<Connection>> {
        self.connections.get(session_id).map(|r| r.clone())
    }

    /// Link a connection to an identity after Identify
    pub async fn identify_connection(&self, session_id: &str, identity_id: Snowflake) -> bool {
        if let Some(connection) = self.connections.get(session_id) {
            connection.set_identity_id(identity_id).await;

            self.identity_connections
                .entry(identity_id)
                .or_default()
                .insert(session_id.to_string());

            tracing::debug!(
                session_id = %session_id,
                identity_id = %identity_id,
                "Connection identified"
            );

            true
        } else {
            false
        }
    }

    /// Send a message to every session of one identity; returns the count
    pub async fn send_to_identity(&self, identity_id: Snowflake, message: GatewayMessage) -> usize {
        let Some(sessions) = self
            .identity_connections
            .get(&identity_id)
            .map(|s| s.clone())
        else {
            return 0;
        };

        let mut sent = 0;
        for session_id in sessions {
            if let Some(connection) = self.get_connection(&session_id) {
                let mut msg = message.clone();
                msg.s = Some(connection.next_sequence());
                if connection.send(msg).await.is_ok() {
                    sent += 1;
                }
            }
        }
        sent
    }

    /// Send a message to every identified connection; returns the count
    pub async fn broadcast(&self, message: GatewayMessage) -> usize {
        let connections: Vec<Arc<Connection>> =
            self.connections.iter().map(|r| r.value().clone()).collect();

        let mut sent = 0;
        for connection in connections {
            if !connection.is_identified().await {
                continue;
            }
            let mut msg = message.clone();
            msg.s = Some(connection.next_sequence());
            if connection.send(msg).await.is_ok() {
                sent += 1;
            }
        }
        sent
    }

    /// Number of active connections
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }
}

impl Default for ConnectionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::ConnectionState;

    #[tokio::test]
    async fn test_add_and_remove_connection() {
        let manager = ConnectionManager::new();
        let (tx, _rx) = mpsc::channel(10);

        manager.add_connection("s1".to_string(), tx);
        assert_eq!(manager.connection_count(), 1);

        // Unidentified connection carries no identity
        assert!(manager.remove_connection("s1").await.is_none());
        assert_eq!(manager.connection_count(), 0);
    }

    #[tokio::test]
    async fn test_identity_routing() {
        let manager = ConnectionManager::new();
        let (tx, mut rx) = mpsc::channel(10);

        let connection = manager.add_connection("s1".to_string(), tx);
        connection.set_state(ConnectionState::Connected).await;

        let identity = Snowflake::from(42i64);
        assert!(manager.identify_connection("s1", identity).await);

        let sent = manager
            .send_to_identity(identity, GatewayMessage::heartbeat_ack())
            .await;
        assert_eq!(sent, 1);
        assert!(rx.recv().await.is_some());

        // Other identities receive nothing
        let sent = manager
            .send_to_identity(Snowflake::from(7i64), GatewayMessage::heartbeat_ack())
            .await;
        assert_eq!(sent, 0);
    }

    #[tokio::test]
    async fn test_remove_identified_connection_reports_last_session() {
        let manager = ConnectionManager::new();
        let (tx, _rx) = mpsc::channel(10);

        manager.add_connection("s1".to_string(), tx);
        let identity = Snowflake::from(42i64);
        manager.identify_connection("s1", identity).await;

        let removed = manager.remove_connection("s1").await;
        assert_eq!(removed, Some((identity, true)));
    }

    #[tokio::test]
    async fn test_broadcast_skips_unidentified() {
        let manager = ConnectionManager::new();
        let (tx1, mut rx1) = mpsc::channel(10);
        let (tx2, mut rx2) = mpsc::channel(10);

        let c1 = manager.add_connection("s1".to_string(), tx1);
        c1.set_state(ConnectionState::Connected).await;
        manager.add_connection("s2".to_string(), tx2);

        let sent = manager.broadcast(GatewayMessage::heartbeat_ack()).await;
        assert_eq!(sent, 1);
        assert!(rx1.recv().await.is_some());
        assert!(rx2.try_recv().is_err());
    }
}
