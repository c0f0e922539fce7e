//! Like service
//!
//! One transactional toggle per call: the like record and the counter move
//! together or not at all.

use serde_json::json;
use tracing::{info, instrument};
use wall_core::entities::LikeToggle;
use wall_core::Snowflake;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Like service
pub struct LikeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LikeService<'a> {
    /// Create a new LikeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle an identity's like on a message
    #[instrument(skip(self))]
    pub async fn toggle(
        &self,
        message_id: Snowflake,
        identity_id: Snowflake,
    ) -> ServiceResult<LikeToggle> {
        let toggle = self.ctx.like_repo().toggle(message_id, identity_id).await?;

        info!(
            message_id = %message_id,
            identity_id = %identity_id,
            liked = toggle.liked,
            likes = toggle.likes,
            "Like toggled"
        );

        // Shared stream: every view updates the counter
        self.ctx
            .publisher()
            .publish_message_event(
                "MESSAGE_LIKE_UPDATE",
                json!({
                    "id": message_id.to_string(),
                    "likes": toggle.likes,
                }),
            )
            .await
            .ok();

        // Private stream: the toggling identity updates its own like state
        let event_type = if toggle.liked { "LIKE_ADD" } else { "LIKE_REMOVE" };
        self.ctx
            .publisher()
            .publish_like_event(
                identity_id,
                event_type,
                json!({ "messageId": message_id.to_string() }),
            )
            .await
            .ok();

        Ok(toggle)
    }

    /// All message ids the identity has liked (renders toggle state)
    #[instrument(skip(self))]
    pub async fn liked_message_ids(&self, identity_id: Snowflake) -> ServiceResult<Vec<Snowflake>> {
        Ok(self
            .ctx
            .like_repo()
            .find_message_ids_by_identity(identity_id)
            .await?)
    }
}
