//! Redis Pub/Sub publisher.
//!
//! Publishes events to Redis channels for distribution to WebSocket
//! clients. Services publish after commit and tolerate publish failure;
//! the live subscription, not the mutation's return value, is what keeps
//! views current.

use redis::AsyncCommands;
use serde::{Deserialize, Serialize};

use crate::pool::{RedisPool, RedisResult};
use crate::pubsub::WallChannel;

/// Event wrapper for Pub/Sub messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PubSubEvent {
    /// Event type name (e.g., "MESSAGE_CREATE", "SETTINGS_UPDATE")
    pub event_type: String,
    /// Event payload
    pub data: serde_json::Value,
}

impl PubSubEvent {
    /// Create a new event
    #[must_use]
    pub fn new(event_type: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            event_type: event_type.into(),
            data,
        }
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Redis Pub/Sub publisher
#[derive(Clone)]
pub struct Publisher {
    pool: RedisPool,
}

impl Publisher {
    /// Create a new publisher
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    /// Publish an event to a channel
    pub async fn publish(&self, channel: &WallChannel, event: &PubSubEvent) -> RedisResult<u32> {
        let mut conn = self.pool.get().await?;
        let channel_name = channel.name();
        let payload = event.to_json()?;

        let receivers: u32 = conn.publish(&channel_name, &payload).await?;

        tracing::debug!(
            channel = %channel_name,
            event_type = %event.event_type,
            receivers = receivers,
            "Published event"
        );

        Ok(receivers)
    }
}

/// Convenience methods for the wall's event types
impl Publisher {
    /// Publish a message-set event (create, delete, clear, like count)
    pub async fn publish_message_event(
        &self,
        event_type: &str,
        data: serde_json::Value,
    ) -> RedisResult<u32> {
        let event = PubSubEvent::new(event_type, data);
        self.publish(&WallChannel::Messages, &event).await
    }

    /// Publish a settings overwrite
    pub async fn publish_settings_update(&self, data: serde_json::Value) -> RedisResult<u32> {
        let event = PubSubEvent::new("SETTINGS_UPDATE", data);
        self.publish(&WallChannel::Settings, &event).await
    }

    /// Publish a like event on an identity's private stream
    pub async fn publish_like_event(
        &self,
        identity_id: wall_core::Snowflake,
        event_type: &str,
        data: serde_json::Value,
    ) -> RedisResult<u32> {
        let event = PubSubEvent::new(event_type, data);
        self.publish(&WallChannel::likes(identity_id), &event).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pubsub_event_creation() {
        let data = serde_json::json!({
            "id": "12345",
            "text": "Hello!"
        });

        let event = PubSubEvent::new("MESSAGE_CREATE", data.clone());
        assert_eq!(event.event_type, "MESSAGE_CREATE");
        assert_eq!(event.data, data);
    }

    #[test]
    fn test_event_serialization() {
        let data = serde_json::json!({"text": "test"});
        let event = PubSubEvent::new("TEST_EVENT", data);

        let json = event.to_json().unwrap();
        assert!(json.contains("TEST_EVENT"));
        assert!(json.contains("test"));
    }
}
