//! Admin service
//!
//! Staff operations: single delete, atomic bulk clear, CSV export, and the
//! aggregate mood distribution. Mutations are fire-and-forget with respect
//! to view state - the live subscription carries the change back to every
//! panel.

use serde_json::json;
use tracing::{info, instrument};
use wall_core::entities::Message;
use wall_core::{MoodAxis, ScoreVector, Snowflake};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// CSV export header
pub const EXPORT_HEADER: &str = "ID,Content,UID,Likes,Sentiment";

/// Aggregate mood distribution
#[derive(Debug, Clone, PartialEq)]
pub struct MoodSummary {
    pub message_count: i64,
    /// Per-axis average across all current messages
    pub averages: ScoreVector,
}

/// Admin service
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    /// Create a new AdminService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Delete one message by id (like records cascade with it)
    #[instrument(skip(self))]
    pub async fn delete_message(&self, id: Snowflake) -> ServiceResult<()> {
        self.ctx.message_repo().delete(id).await?;

        info!(message_id = %id, "Message deleted");

        self.ctx
            .publisher()
            .publish_message_event("MESSAGE_DELETE", json!({ "id": id.to_string() }))
            .await
            .ok();

        Ok(())
    }

    /// Delete every message in one atomic batch; returns the count removed
    #[instrument(skip(self))]
    pub async fn clear_all(&self) -> ServiceResult<u64> {
        let deleted = self.ctx.message_repo().delete_all().await?;

        info!(deleted = deleted, "All messages cleared");

        self.ctx
            .publisher()
            .publish_message_event("MESSAGES_CLEARED", json!({ "deleted": deleted }))
            .await
            .ok();

        Ok(deleted)
    }

    /// Serialize the full message set to the export CSV
    #[instrument(skip(self))]
    pub async fn export_csv(&self) -> ServiceResult<String> {
        let messages = self.ctx.message_repo().list_all().await?;
        Ok(render_csv(&messages))
    }

    /// Average each axis across all current messages
    #[instrument(skip(self))]
    pub async fn mood_summary(&self) -> ServiceResult<MoodSummary> {
        let messages = self.ctx.message_repo().list_all().await?;
        Ok(summarize(&messages))
    }
}

/// Render the export CSV: header plus one row per message, text fields
/// double-quote-escaped, sentiment column the highest-scoring axis name.
fn render_csv(messages: &[Message]) -> String {
    let mut csv = String::from(EXPORT_HEADER);
    csv.push('\n');

    for message in messages {
        let escaped = message.text.replace('"', "\"\"");
        csv.push_str(&format!(
            "{},\"{}\",{},{},{}\n",
            message.id,
            escaped,
            message.author_id,
            message.likes,
            message.dominant_axis().as_str(),
        ));
    }

    csv
}

/// Per-axis mean over the loaded set; an empty wall averages to zero
fn summarize(messages: &[Message]) -> MoodSummary {
    let count = messages.len() as i64;
    if count == 0 {
        return MoodSummary {
            message_count: 0,
            averages: ScoreVector {
                positive: 0.0,
                calm: 0.0,
                energetic: 0.0,
                deep: 0.0,
            },
        };
    }

    let mut totals = [0.0f64; 4];
    for message in messages {
        for (slot, axis) in totals.iter_mut().zip(MoodAxis::ALL) {
            *slot += message.scores.get(axis);
        }
    }

    let n = count as f64;
    MoodSummary {
        message_count: count,
        averages: ScoreVector {
            positive: totals[0] / n,
            calm: totals[1] / n,
            energetic: totals[2] / n,
            deep: totals[3] / n,
        },
    }
}
