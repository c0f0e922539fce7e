//! Like database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the likes table
#[derive(Debug, Clone, FromRow)]
pub struct LikeModel {
    pub message_id: i64,
    pub identity_id: i64,
    pub created_at: DateTime<Utc>,
}
