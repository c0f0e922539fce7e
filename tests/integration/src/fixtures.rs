//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Submission request
#[derive(Debug, Serialize)]
pub struct SubmitRequest {
    pub text: String,
}

impl SubmitRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            text: format!("test reflection {suffix}"),
        }
    }
}

/// Identity response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResponse {
    pub identity_id: String,
    pub token: String,
    pub expires_in: i64,
}

/// Submission receipt (the success ticket)
#[derive(Debug, Deserialize)]
pub struct ReceiptResponse {
    pub id: String,
    pub text: String,
    pub scores: HashMap<String, f64>,
    pub degraded: bool,
}

/// Message as rendered by the views
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: String,
    pub text: String,
    pub timestamp: String,
    pub scores: HashMap<String, f64>,
    pub likes: i64,
    pub user_id: String,
}

/// Like toggle outcome
#[derive(Debug, Deserialize)]
pub struct LikeToggleResponse {
    pub liked: bool,
    pub likes: i64,
}

/// Bulk clear outcome
#[derive(Debug, Deserialize)]
pub struct ClearedResponse {
    pub deleted: u64,
}

/// The full settings document as sent by the admin panel
pub fn settings_document(display_question: &str) -> serde_json::Value {
    serde_json::json!({
        "input": {
            "question": "What is on your mind today?",
            "subtitle": "Leave a short reflection",
            "placeholder": "Type here...",
            "buttonText": "Send",
            "fontFamily": "Pretendard"
        },
        "display": {
            "question": display_question,
            "subtitle": "Reflections from today's visitors",
            "questionSize": "72px",
            "fontFamily": "Pretendard"
        }
    })
}
