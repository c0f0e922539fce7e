//! Anonymous identity

pub mod identity;

pub use identity::{IdentityClaims, IdentityService, IdentityToken};
