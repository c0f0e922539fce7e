//! Session id generation

use uuid::Uuid;

/// Gateway session helpers
pub struct Session;

impl Session {
    /// Generate a unique session id
    #[must_use]
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }
}
