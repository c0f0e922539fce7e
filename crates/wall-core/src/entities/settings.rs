//! Wall settings - the per-deployment copy document
//!
//! One logical instance; last writer wins; mutated only by the admin view
//! as a full-document overwrite.

use serde::{Deserialize, Serialize};

/// Copy shown on the visitor input view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSettings {
    pub question: String,
    pub subtitle: String,
    pub placeholder: String,
    pub button_text: String,
    pub font_family: String,
}

/// Copy shown on the display wall
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    pub question: String,
    pub subtitle: String,
    /// CSS length string, e.g. "72px"
    pub question_size: String,
    pub font_family: String,
}

/// The full settings document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallSettings {
    pub input: InputSettings,
    pub display: DisplaySettings,
}

impl Default for WallSettings {
    fn default() -> Self {
        Self {
            input: InputSettings {
                question: "What is on your mind today?".to_string(),
                subtitle: "Leave a short reflection for the wall".to_string(),
                placeholder: "Type your thought here...".to_string(),
                button_text: "Send".to_string(),
                font_family: "Pretendard".to_string(),
            },
            display: DisplaySettings {
                question: "What is on your mind today?".to_string(),
                subtitle: "Reflections from today's visitors".to_string(),
                question_size: "72px".to_string(),
                font_family: "Pretendard".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape_is_camel_case() {
        let settings = WallSettings::default();
        let json = serde_json::to_value(&settings).unwrap();

        assert!(json["input"]["buttonText"].is_string());
        assert!(json["input"]["fontFamily"].is_string());
        assert!(json["display"]["questionSize"].is_string());
    }

    #[test]
    fn test_round_trip() {
        let settings = WallSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let back: WallSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_default_question_size_is_css_length() {
        let settings = WallSettings::default();
        assert!(settings.display.question_size.ends_with("px"));
    }
}
