//! Entity <-> model mappers

pub mod like;
pub mod message;
pub mod settings;
