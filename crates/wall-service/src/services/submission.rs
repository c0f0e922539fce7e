//! Submission service
//!
//! The visitor input view's write path: validate, classify, persist,
//! publish. The classifier call blocks the submission (one attempt, no
//! retry); its failure never does - the fallback vector keeps the write
//! going.

use serde_json::json;
use tracing::{info, instrument, warn};
use wall_core::entities::Message;
use wall_core::Snowflake;

use crate::dto::MessageResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// A persisted submission plus its classification origin
#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    pub message: Message,
    /// True when the scores came from the degraded path
    pub degraded: bool,
}

/// Submission service
pub struct SubmissionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SubmissionService<'a> {
    /// Create a new SubmissionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Persist a visitor reflection.
    ///
    /// Returns the receipt for the success ticket; the live message
    /// subscription, not this return value, is what refreshes any
    /// displayed list.
    #[instrument(skip(self, text), fields(author_id = %author_id))]
    pub async fn submit(&self, author_id: Snowflake, text: &str) -> ServiceResult<SubmissionReceipt> {
        Message::validate_text(text).map_err(ServiceError::from)?;

        let classification = self.ctx.classifier().classify(text).await;
        let degraded = classification.is_fallback();
        if degraded {
            warn!(author_id = %author_id, "storing degraded sentiment scores");
        }

        let message_id = self.ctx.generate_id();
        let message = Message::new(
            message_id,
            author_id,
            text.trim().to_string(),
            classification.vector(),
        );

        self.ctx.message_repo().create(&message).await?;

        info!(message_id = %message_id, degraded = degraded, "Message created");

        // Fan out after commit; subscribers reconverge on next read if the
        // publish is lost
        self.ctx
            .publisher()
            .publish_message_event(
                "MESSAGE_CREATE",
                serde_json::to_value(MessageResponse::from(&message)).unwrap_or_else(|_| json!({})),
            )
            .await
            .ok();

        Ok(SubmissionReceipt { message, degraded })
    }

    /// The ten-most-recent feed shown under the input form
    #[instrument(skip(self))]
    pub async fn recent_messages(&self, limit: i64) -> ServiceResult<Vec<MessageResponse>> {
        let messages = self.ctx.message_repo().list_recent(limit).await?;
        Ok(messages.iter().map(MessageResponse::from).collect())
    }
}
