//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation.

use serde::Deserialize;
use validator::Validate;
use wall_core::entities::{DisplaySettings, InputSettings, WallSettings};

// ============================================================================
// Identity Requests
// ============================================================================

/// Anonymous identity bootstrap request
///
/// A previously issued token keeps the device's identity; absent or invalid
/// tokens mint a fresh one.
#[derive(Debug, Clone, Deserialize, Default, Validate)]
pub struct IdentifyRequest {
    pub token: Option<String>,
}

// ============================================================================
// Message Requests
// ============================================================================

/// Visitor submission request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitMessageRequest {
    #[validate(length(min = 1, max = 150, message = "Message must be 1-150 characters"))]
    pub text: String,
}

// ============================================================================
// Settings Requests
// ============================================================================

/// Full settings overwrite request
///
/// The whole document is replaced with exactly this shape; callers must
/// always send the complete merged object.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateSettingsRequest {
    #[validate(nested)]
    pub input: InputSettingsRequest,
    #[validate(nested)]
    pub display: DisplaySettingsRequest,
}

/// Input view copy
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InputSettingsRequest {
    #[validate(length(min = 1, max = 300, message = "Question must be 1-300 characters"))]
    pub question: String,

    #[validate(length(max = 300, message = "Subtitle must be at most 300 characters"))]
    pub subtitle: String,

    #[validate(length(max = 300, message = "Placeholder must be at most 300 characters"))]
    pub placeholder: String,

    #[validate(length(min = 1, max = 50, message = "Button text must be 1-50 characters"))]
    pub button_text: String,

    #[validate(length(min = 1, max = 100, message = "Font family must be 1-100 characters"))]
    pub font_family: String,
}

/// Display wall copy
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettingsRequest {
    #[validate(length(min = 1, max = 300, message = "Question must be 1-300 characters"))]
    pub question: String,

    #[validate(length(max = 300, message = "Subtitle must be at most 300 characters"))]
    pub subtitle: String,

    /// CSS length string, e.g. "72px"
    #[validate(length(min = 1, max = 20, message = "Question size must be 1-20 characters"))]
    pub question_size: String,

    #[validate(length(min = 1, max = 100, message = "Font family must be 1-100 characters"))]
    pub font_family: String,
}

impl From<UpdateSettingsRequest> for WallSettings {
    fn from(request: UpdateSettingsRequest) -> Self {
        WallSettings {
            input: InputSettings {
                question: request.input.question,
                subtitle: request.input.subtitle,
                placeholder: request.input.placeholder,
                button_text: request.input.button_text,
                font_family: request.input.font_family,
            },
            display: DisplaySettings {
                question: request.display.question,
                subtitle: request.display.subtitle,
                question_size: request.display.question_size,
                font_family: request.display.font_family,
            },
        }
    }
}
