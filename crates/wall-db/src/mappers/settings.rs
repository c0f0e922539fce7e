//! Settings entity <-> model mapper

use wall_core::entities::{DisplaySettings, InputSettings, WallSettings};

use crate::models::SettingsModel;

/// Convert SettingsModel to WallSettings entity
impl From<SettingsModel> for WallSettings {
    fn from(model: SettingsModel) -> Self {
        WallSettings {
            input: InputSettings {
                question: model.input_question,
                subtitle: model.input_subtitle,
                placeholder: model.input_placeholder,
                button_text: model.input_button_text,
                font_family: model.input_font_family,
            },
            display: DisplaySettings {
                question: model.display_question,
                subtitle: model.display_subtitle,
                question_size: model.display_question_size,
                font_family: model.display_font_family,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_model_to_entity() {
        let model = SettingsModel {
            id: 1,
            input_question: "Q".to_string(),
            input_subtitle: "S".to_string(),
            input_placeholder: "P".to_string(),
            input_button_text: "B".to_string(),
            input_font_family: "F".to_string(),
            display_question: "DQ".to_string(),
            display_subtitle: "DS".to_string(),
            display_question_size: "64px".to_string(),
            display_font_family: "DF".to_string(),
            updated_at: Utc::now(),
        };

        let settings = WallSettings::from(model);
        assert_eq!(settings.input.button_text, "B");
        assert_eq!(settings.display.question_size, "64px");
    }
}
