//! Redis pub/sub plumbing between the API and the gateway

pub mod channels;
pub mod publisher;
pub mod subscriber;

pub use channels::WallChannel;
pub use publisher::{Publisher, PubSubEvent};
pub use subscriber::{
    ReceivedMessage, Subscriber, SubscriberBuilder, SubscriberConfig, SubscriberError,
    SubscriberResult,
};
