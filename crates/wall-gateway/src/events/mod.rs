//! Gateway events

pub mod event_types;
pub mod payloads;

pub use event_types::WallEventType;
pub use payloads::ReadyPayload;
