//! Pub/Sub channel definitions.
//!
//! Three live streams mirror the three view subscriptions: the shared
//! message set, the shared settings document, and a per-identity stream for
//! like toggle state. The streams are independent; consumers must not
//! assume ordering across them.

use wall_core::Snowflake;

/// Channel for message-set events (create, delete, clear, like counts)
pub const MESSAGES_CHANNEL: &str = "wall:messages";
/// Channel for settings overwrites
pub const SETTINGS_CHANNEL: &str = "wall:settings";
/// Channel prefix for per-identity like events
pub const LIKES_CHANNEL_PREFIX: &str = "wall:likes:";

/// Pub/Sub channel types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WallChannel {
    /// The shared live message set
    Messages,
    /// The shared settings document
    Settings,
    /// One identity's like records
    Likes(Snowflake),
    /// Custom channel name
    Custom(String),
}

impl WallChannel {
    /// Create a per-identity likes channel
    #[must_use]
    pub fn likes(identity_id: Snowflake) -> Self {
        Self::Likes(identity_id)
    }

    /// Create a custom channel
    #[must_use]
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }

    /// Get the Redis channel name
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Messages => MESSAGES_CHANNEL.to_string(),
            Self::Settings => SETTINGS_CHANNEL.to_string(),
            Self::Likes(id) => format!("{LIKES_CHANNEL_PREFIX}{id}"),
            Self::Custom(name) => name.clone(),
        }
    }

    /// Parse a channel name back to a `WallChannel`
    #[must_use]
    pub fn parse(name: &str) -> Self {
        if name == MESSAGES_CHANNEL {
            return Self::Messages;
        }
        if name == SETTINGS_CHANNEL {
            return Self::Settings;
        }
        if let Some(id_str) = name.strip_prefix(LIKES_CHANNEL_PREFIX) {
            if let Ok(id) = id_str.parse::<i64>() {
                return Self::Likes(Snowflake::from(id));
            }
        }
        Self::Custom(name.to_string())
    }
}

impl std::fmt::Display for WallChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
