//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Like, LikeToggle, Message, WallSettings};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Find message by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Message>>;

    /// List the newest messages, descending by id (== by server timestamp)
    async fn list_recent(&self, limit: i64) -> RepoResult<Vec<Message>>;

    /// List every message, newest first (export and aggregation)
    async fn list_all(&self) -> RepoResult<Vec<Message>>;

    /// Create a new message
    async fn create(&self, message: &Message) -> RepoResult<()>;

    /// Delete one message and its like records
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Delete every message and like record in one atomic batch.
    /// Returns the number of messages removed.
    async fn delete_all(&self) -> RepoResult<u64>;

    /// Count all messages
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Like Repository
// ============================================================================

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Find a like record by message and identity
    async fn find(&self, message_id: Snowflake, identity_id: Snowflake)
        -> RepoResult<Option<Like>>;

    /// All message ids an identity has liked
    async fn find_message_ids_by_identity(
        &self,
        identity_id: Snowflake,
    ) -> RepoResult<Vec<Snowflake>>;

    /// Toggle an identity's like on a message.
    ///
    /// Record present: remove it and decrement the counter. Record absent:
    /// insert it and increment the counter. Both writes run in one
    /// transaction; a decrement that would drive the counter negative is
    /// refused with `DomainError::LikeUnderflow`.
    async fn toggle(&self, message_id: Snowflake, identity_id: Snowflake)
        -> RepoResult<LikeToggle>;
}

// ============================================================================
// Settings Repository
// ============================================================================

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Current settings document; defaults if never written
    async fn get(&self) -> RepoResult<WallSettings>;

    /// Replace the entire settings document with the provided shape
    async fn overwrite(&self, settings: &WallSettings) -> RepoResult<()>;
}
