//! # wall-gateway
//!
//! WebSocket gateway: clients identify with their anonymous token and view
//! role, then receive the wall's live streams (messages, settings, and
//! their own like state) as dispatch events.

pub mod broadcast;
pub mod connection;
pub mod events;
pub mod handlers;
pub mod protocol;
pub mod server;
