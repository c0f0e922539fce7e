//! Redis-to-WebSocket event dispatch

pub mod dispatcher;

pub use dispatcher::{EventDispatcher, EventDispatcherConfig};
