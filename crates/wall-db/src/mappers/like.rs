//! Like entity <-> model mapper

use wall_core::entities::Like;
use wall_core::value_objects::Snowflake;

use crate::models::LikeModel;

/// Convert LikeModel to Like entity
impl From<LikeModel> for Like {
    fn from(model: LikeModel) -> Self {
        Like {
            message_id: Snowflake::new(model.message_id),
            identity_id: Snowflake::new(model.identity_id),
            created_at: model.created_at,
        }
    }
}
