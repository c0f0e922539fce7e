//! Message entity - a visitor reflection on the wall

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{MoodAxis, Rgb, ScoreVector, Snowflake};

/// Maximum message length in characters
pub const MAX_MESSAGE_LEN: usize = 150;

/// Message entity
///
/// Text and scores are immutable after creation; only the like counter
/// moves.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: Snowflake,
    pub author_id: Snowflake,
    pub text: String,
    pub scores: ScoreVector,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a new Message with zero likes
    pub fn new(id: Snowflake, author_id: Snowflake, text: String, scores: ScoreVector) -> Self {
        Self {
            id,
            author_id,
            text,
            scores,
            likes: 0,
            created_at: Utc::now(),
        }
    }

    /// Validate submission text: non-empty after trim, within the length cap
    pub fn validate_text(text: &str) -> Result<(), DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::EmptyMessage);
        }
        if text.chars().count() > MAX_MESSAGE_LEN {
            return Err(DomainError::ContentTooLong {
                max: MAX_MESSAGE_LEN,
            });
        }
        Ok(())
    }

    /// The highest-scoring mood axis (the export's Sentiment column)
    #[inline]
    pub fn dominant_axis(&self) -> MoodAxis {
        self.scores.dominant()
    }

    /// The blended display color for this message's card
    #[inline]
    pub fn aura(&self) -> Rgb {
        self.scores.aura()
    }
}
