//! # wall-cache
//!
//! Redis layer: connection pool plus the pub/sub channels that carry live
//! updates from the API to the gateway.

pub mod pool;
pub mod pubsub;

pub use pool::{create_shared_pool, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool};
pub use pubsub::{
    Publisher, PubSubEvent, ReceivedMessage, Subscriber, SubscriberBuilder, SubscriberConfig,
    SubscriberError, WallChannel,
};
