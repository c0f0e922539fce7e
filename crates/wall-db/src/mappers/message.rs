//! Message entity <-> model mapper

use wall_core::entities::Message;
use wall_core::value_objects::{ScoreVector, Snowflake};

use crate::models::MessageModel;

/// Convert MessageModel to Message entity
impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Message {
            id: Snowflake::new(model.id),
            author_id: Snowflake::new(model.author_id),
            text: model.text,
            // Column checks already guarantee non-negative scores
            scores: ScoreVector {
                positive: model.score_positive,
                calm: model.score_calm,
                energetic: model.score_energetic,
                deep: model.score_deep,
            },
            likes: model.likes,
            created_at: model.created_at,
        }
    }
}
