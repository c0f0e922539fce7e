//! PostgreSQL implementation of SettingsRepository
//!
//! One row, id 1. `overwrite` replaces every column with the provided
//! document; there are no partial-field semantics.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use wall_core::entities::WallSettings;
use wall_core::traits::{RepoResult, SettingsRepository};

use crate::models::SettingsModel;

use super::error::map_db_error;

/// PostgreSQL implementation of SettingsRepository
#[derive(Clone)]
pub struct PgSettingsRepository {
    pool: PgPool,
}

impl PgSettingsRepository {
    /// Create a new PgSettingsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for PgSettingsRepository {
    #[instrument(skip(self))]
    async fn get(&self) -> RepoResult<WallSettings> {
        let result = sqlx::query_as::<_, SettingsModel>(
            r#"
            SELECT id, input_question, input_subtitle, input_placeholder,
                   input_button_text, input_font_family, display_question,
                   display_subtitle, display_question_size, display_font_family,
                   updated_at
            FROM wall_settings
            WHERE id = 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        // Never written yet: the views still need copy to render
        Ok(result.map(WallSettings::from).unwrap_or_default())
    }

    #[instrument(skip(self, settings))]
    async fn overwrite(&self, settings: &WallSettings) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO wall_settings
                (id, input_question, input_subtitle, input_placeholder,
                 input_button_text, input_font_family, display_question,
                 display_subtitle, display_question_size, display_font_family,
                 updated_at)
            VALUES (1, $1, $2, $3, $4, $5, $6, $7, $8, $9, NOW())
            ON CONFLICT (id) DO UPDATE SET
                input_question = EXCLUDED.input_question,
                input_subtitle = EXCLUDED.input_subtitle,
                input_placeholder = EXCLUDED.input_placeholder,
                input_button_text = EXCLUDED.input_button_text,
                input_font_family = EXCLUDED.input_font_family,
                display_question = EXCLUDED.display_question,
                display_subtitle = EXCLUDED.display_subtitle,
                display_question_size = EXCLUDED.display_question_size,
                display_font_family = EXCLUDED.display_font_family,
                updated_at = NOW()
            "#,
        )
        .bind(&settings.input.question)
        .bind(&settings.input.subtitle)
        .bind(&settings.input.placeholder)
        .bind(&settings.input.button_text)
        .bind(&settings.input.font_family)
        .bind(&settings.display.question)
        .bind(&settings.display.subtitle)
        .bind(&settings.display.question_size)
        .bind(&settings.display.font_family)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgSettingsRepository>();
    }
}
