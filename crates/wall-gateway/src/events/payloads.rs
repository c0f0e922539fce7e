//! Gateway event payloads

use serde::Serialize;
use wall_core::entities::WallSettings;
use wall_core::Snowflake;
use wall_service::MessageResponse;

use crate::protocol::ViewRole;

/// READY payload: the snapshot a freshly identified client renders from
/// before the live streams start moving
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadyPayload {
    /// Protocol version
    pub v: u8,
    pub session_id: String,
    pub view: ViewRole,
    /// Resolved identity, absent for anonymous display connections
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_id: Option<Snowflake>,
    pub settings: WallSettings,
    /// Newest-first snapshot, capped per view role
    pub messages: Vec<MessageResponse>,
    /// Message ids the identity has liked (empty when anonymous)
    pub liked_message_ids: Vec<Snowflake>,
}
