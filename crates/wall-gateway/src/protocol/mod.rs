//! Gateway wire protocol

pub mod close_codes;
pub mod messages;
pub mod opcodes;
pub mod payloads;

pub use close_codes::CloseCode;
pub use messages::GatewayMessage;
pub use opcodes::OpCode;
pub use payloads::{HelloPayload, IdentifyPayload, ViewRole};
