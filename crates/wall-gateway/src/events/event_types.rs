//! Gateway event types
//!
//! Defines all event type names for dispatch messages. The message-set and
//! settings events reach every connection; the like events travel only on
//! the toggling identity's stream.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gateway event types
///
/// These are the event names sent in the `t` field of dispatch messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WallEventType {
    // Connection events
    /// Sent after successful Identify, with the current wall snapshot
    Ready,

    // Message events
    /// New reflection submitted
    MessageCreate,
    /// One message removed by staff
    MessageDelete,
    /// The whole set cleared by staff
    MessagesCleared,
    /// A message's like counter changed
    MessageLikeUpdate,

    // Settings events
    /// The settings document was overwritten
    SettingsUpdate,

    // Per-identity like events
    /// The identity now likes a message
    LikeAdd,
    /// The identity no longer likes a message
    LikeRemove,
}

impl WallEventType {
    /// Get the string representation of the event type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "READY",
            Self::MessageCreate => "MESSAGE_CREATE",
            Self::MessageDelete => "MESSAGE_DELETE",
            Self::MessagesCleared => "MESSAGES_CLEARED",
            Self::MessageLikeUpdate => "MESSAGE_LIKE_UPDATE",
            Self::SettingsUpdate => "SETTINGS_UPDATE",
            Self::LikeAdd => "LIKE_ADD",
            Self::LikeRemove => "LIKE_REMOVE",
        }
    }

    /// Parse an event name
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "READY" => Some(Self::Ready),
            "MESSAGE_CREATE" => Some(Self::MessageCreate),
            "MESSAGE_DELETE" => Some(Self::MessageDelete),
            "MESSAGES_CLEARED" => Some(Self::MessagesCleared),
            "MESSAGE_LIKE_UPDATE" => Some(Self::MessageLikeUpdate),
            "SETTINGS_UPDATE" => Some(Self::SettingsUpdate),
            "LIKE_ADD" => Some(Self::LikeAdd),
            "LIKE_REMOVE" => Some(Self::LikeRemove),
            _ => None,
        }
    }
}

impl fmt::Display for WallEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
