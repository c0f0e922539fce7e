//! Request handlers

pub mod admin;
pub mod health;
pub mod identity;
pub mod likes;
pub mod messages;
pub mod settings;
