//! Settings service
//!
//! Reads the single settings document and applies the admin panel's
//! full-document overwrites.

use serde_json::json;
use tracing::{info, instrument};
use wall_core::entities::WallSettings;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Settings service
pub struct SettingsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SettingsService<'a> {
    /// Create a new SettingsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Current settings document (defaults if never written)
    #[instrument(skip(self))]
    pub async fn get(&self) -> ServiceResult<WallSettings> {
        Ok(self.ctx.settings_repo().get().await?)
    }

    /// Replace the whole settings document.
    ///
    /// Last writer wins; there are no partial-field semantics, so the
    /// caller must always send the full merged object.
    #[instrument(skip(self, settings))]
    pub async fn overwrite(&self, settings: WallSettings) -> ServiceResult<WallSettings> {
        self.ctx.settings_repo().overwrite(&settings).await?;

        info!("Settings overwritten");

        self.ctx
            .publisher()
            .publish_settings_update(serde_json::to_value(&settings).unwrap_or_else(|_| json!({})))
            .await
            .ok();

        Ok(settings)
    }
}
