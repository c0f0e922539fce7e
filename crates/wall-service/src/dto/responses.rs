//! Response DTOs for API endpoints

use chrono::{DateTime, Utc};
use serde::Serialize;
use wall_core::entities::{LikeToggle, Message};
use wall_core::value_objects::{ScoreVector, Snowflake};
use wall_common::IdentityToken;

/// Message as the views see it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: Snowflake,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub scores: ScoreVector,
    pub likes: i64,
    pub user_id: Snowflake,
}

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id,
            text: message.text.clone(),
            timestamp: message.created_at,
            scores: message.scores,
            likes: message.likes,
            user_id: message.author_id,
        }
    }
}

/// The success ticket returned from a submission
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceiptResponse {
    pub id: Snowflake,
    pub text: String,
    pub scores: ScoreVector,
    /// True when the scores came from the degraded (fallback) path
    pub degraded: bool,
}

/// Issued anonymous identity
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResponse {
    pub identity_id: Snowflake,
    pub token: String,
    pub expires_in: i64,
}

impl From<IdentityToken> for IdentityResponse {
    fn from(token: IdentityToken) -> Self {
        Self {
            identity_id: token.identity_id,
            token: token.token,
            expires_in: token.expires_in,
        }
    }
}

/// Like toggle outcome
#[derive(Debug, Clone, Serialize)]
pub struct LikeToggleResponse {
    pub liked: bool,
    pub likes: i64,
}

impl From<LikeToggle> for LikeToggleResponse {
    fn from(toggle: LikeToggle) -> Self {
        Self {
            liked: toggle.liked,
            likes: toggle.likes,
        }
    }
}

/// The caller's liked message ids
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikedMessagesResponse {
    pub message_ids: Vec<Snowflake>,
}

/// Aggregate mood distribution for the admin panel
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodSummaryResponse {
    pub message_count: i64,
    /// Per-axis average across all current messages
    pub averages: ScoreVector,
}

impl From<crate::services::MoodSummary> for MoodSummaryResponse {
    fn from(summary: crate::services::MoodSummary) -> Self {
        Self {
            message_count: summary.message_count,
            averages: summary.averages,
        }
    }
}

/// Bulk clear outcome
#[derive(Debug, Clone, Serialize)]
pub struct ClearedResponse {
    pub deleted: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_response_wire_shape() {
        let message = Message::new(
            Snowflake::new(42),
            Snowflake::new(7),
            "hi".to_string(),
            ScoreVector::new(70.0, 10.0, 15.0, 5.0).unwrap(),
        );

        let response = MessageResponse::from(&message);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["id"], "42");
        assert_eq!(json["userId"], "7");
        assert_eq!(json["likes"], 0);
        assert_eq!(json["scores"]["POSITIVE"], 70.0);
        assert!(json["timestamp"].is_string());
    }
}
