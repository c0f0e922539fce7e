//! Settings database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the single-row wall_settings table
#[derive(Debug, Clone, FromRow)]
pub struct SettingsModel {
    pub id: i16,
    pub input_question: String,
    pub input_subtitle: String,
    pub input_placeholder: String,
    pub input_button_text: String,
    pub input_font_family: String,
    pub display_question: String,
    pub display_subtitle: String,
    pub display_question_size: String,
    pub display_font_family: String,
    pub updated_at: DateTime<Utc>,
}
