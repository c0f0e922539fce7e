//! Request extractors

pub mod auth;
pub mod validated;

pub use auth::AuthIdentity;
pub use validated::ValidatedJson;
