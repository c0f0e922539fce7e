//! Message database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the messages table
///
/// Scores are stored as one column per axis; the check constraints keep
/// them non-negative and the like counter at zero or above.
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: i64,
    pub author_id: i64,
    pub text: String,
    pub score_positive: f64,
    pub score_calm: f64,
    pub score_energetic: f64,
    pub score_deep: f64,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
}
