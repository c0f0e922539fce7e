//! Like record - one identity's like on one message

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Like record entity
///
/// Keyed by `(identity_id, message_id)`; existence means "liked".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub message_id: Snowflake,
    pub identity_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Like {
    /// Create a new Like
    pub fn new(message_id: Snowflake, identity_id: Snowflake) -> Self {
        Self {
            message_id,
            identity_id,
            created_at: Utc::now(),
        }
    }
}

/// Outcome of a like toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeToggle {
    /// Whether the identity likes the message after the toggle
    pub liked: bool,
    /// The message's like counter after the toggle
    pub likes: i64,
}
