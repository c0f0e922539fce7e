//! Event dispatcher
//!
//! Receives events from Redis Pub/Sub and dispatches them to WebSocket
//! connections: the shared message and settings streams go to everyone,
//! per-identity like events only to that identity's sessions.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast;
use wall_cache::{ReceivedMessage, Subscriber, SubscriberBuilder, WallChannel};
use wall_core::Snowflake;

use crate::connection::ConnectionManager;
use crate::protocol::GatewayMessage;

/// Configuration for the event dispatcher
#[derive(Debug, Clone)]
pub struct EventDispatcherConfig {
    /// Redis URL
    pub redis_url: String,
    /// Broadcast buffer size
    pub broadcast_buffer: usize,
    /// Reconnection delay in milliseconds
    pub reconnect_delay_ms: u64,
}

impl Default for EventDispatcherConfig {
    fn default() -> Self {
        Self {
            redis_url: "redis://127.0.0.1:6379".to_string(),
            broadcast_buffer: 1024,
            reconnect_delay_ms: 1000,
        }
    }
}

/// Event dispatcher that routes Redis Pub/Sub messages to WebSocket connections
pub struct EventDispatcher {
    /// Connection manager for sending messages
    connection_manager: Arc<ConnectionManager>,
    /// Redis subscriber
    subscriber: Subscriber,
    /// Whether the dispatcher is running
    running: Arc<AtomicBool>,
}

impl EventDispatcher {
    /// Create a new event dispatcher subscribed to the shared streams
    pub async fn new(
        config: EventDispatcherConfig,
        connection_manager: Arc<ConnectionManager>,
    ) -> Result<Self, wall_cache::SubscriberError> {
        let subscriber = SubscriberBuilder::new()
            .redis_url(&config.redis_url)
            .broadcast_buffer(config.broadcast_buffer)
            .reconnect_delay_ms(config.reconnect_delay_ms)
            // The message set and settings document reach every view
            .subscribe(WallChannel::Messages)
            .subscribe(WallChannel::Settings)
            .build()
            .await?;

        Ok(Self {
            connection_manager,
            subscriber,
            running: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Attach an identity's private like stream
    pub async fn subscribe_identity(
        &self,
        identity_id: Snowflake,
    ) -> Result<(), wall_cache::SubscriberError> {
        self.subscriber
            .subscribe(&[WallChannel::likes(identity_id)])
            .await
    }

    /// Drop an identity's private like stream (last session gone)
    pub async fn unsubscribe_identity(
        &self,
        identity_id: Snowflake,
    ) -> Result<(), wall_cache::SubscriberError> {
        self.subscriber
            .unsubscribe(&[WallChannel::likes(identity_id)])
            .await
    }

    /// Start the event dispatcher
    ///
    /// This spawns a background task that receives messages from Redis
    /// and dispatches them to appropriate WebSocket connections.
    pub fn start(self: Arc<Self>) {
        if self.running.swap(true, Ordering::SeqCst) {
            tracing::warn!("Event dispatcher is already running");
            return;
        }

        let dispatcher = self.clone();
        tokio::spawn(async move {
            dispatcher.run().await;
        });

        tracing::info!("Event dispatcher started");
    }

    /// Stop the event dispatcher
    pub async fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
        self.subscriber.shutdown().await.ok();
        tracing::info!("Event dispatcher stopped");
    }

    /// Run the event dispatcher loop
    async fn run(&self) {
        let mut receiver = self.subscriber.receiver();

        while self.running.load(Ordering::SeqCst) {
            match receiver.recv().await {
                Ok(msg) => {
                    self.handle_message(msg).await;
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(lagged = n, "Event dispatcher lagged behind");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::warn!("Event dispatcher channel closed");
                    break;
                }
            }
        }

        self.running.store(false, Ordering::SeqCst);
        tracing::info!("Event dispatcher loop ended");
    }

    /// Handle a received message from Redis
    async fn handle_message(&self, msg: ReceivedMessage) {
        let event = match &msg.event {
            Some(e) => e,
            None => {
                tracing::debug!(
                    channel = ?msg.channel,
                    "Received non-event message, ignoring"
                );
                return;
            }
        };

        tracing::trace!(
            channel = ?msg.channel,
            event_type = %event.event_type,
            "Dispatching event"
        );

        // The sequence number is assigned per connection at send time
        let gateway_msg = GatewayMessage::dispatch(&event.event_type, 0, event.data.clone());

        match &msg.channel {
            WallChannel::Messages | WallChannel::Settings => {
                let sent = self.connection_manager.broadcast(gateway_msg).await;
                tracing::trace!(
                    event_type = %event.event_type,
                    sent = sent,
                    "Event broadcast to all views"
                );
            }
            WallChannel::Likes(identity_id) => {
                let sent = self
                    .connection_manager
                    .send_to_identity(*identity_id, gateway_msg)
                    .await;
                tracing::trace!(
                    identity_id = %identity_id,
                    event_type = %event.event_type,
                    sent = sent,
                    "Event dispatched to identity"
                );
            }
            WallChannel::Custom(name) => {
                tracing::debug!(
                    channel = %name,
                    event_type = %event.event_type,
                    "Received event on custom channel, ignoring"
                );
            }
        }
    }

    /// Check if the dispatcher is running
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

impl Drop for EventDispatcher {
    fn drop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
    }
}
