//! Gateway payload structures

use serde::{Deserialize, Serialize};

/// Default heartbeat interval in milliseconds
pub const DEFAULT_HEARTBEAT_INTERVAL_MS: u64 = 45_000;

/// Which view this connection renders
///
/// Mirrors the client's query-parameter routing; anything unrecognized
/// falls back to the display wall (the read-only role).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewRole {
    Input,
    #[default]
    Display,
    Admin,
}

impl ViewRole {
    /// Parse a client-provided view name; unknown values become Display
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("input") => Self::Input,
            Some("admin") => Self::Admin,
            _ => Self::Display,
        }
    }

    /// Whether this role can connect without an identity token
    #[must_use]
    pub const fn allows_anonymous(self) -> bool {
        matches!(self, Self::Display)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Display => "display",
            Self::Admin => "admin",
        }
    }
}

/// Hello payload (op 10)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelloPayload {
    /// How often the client should send heartbeats, in milliseconds
    pub heartbeat_interval: u64,
}

impl HelloPayload {
    /// Create with the default interval
    #[must_use]
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_HEARTBEAT_INTERVAL_MS)
    }

    /// Create with a custom interval
    #[must_use]
    pub fn with_interval(heartbeat_interval: u64) -> Self {
        Self { heartbeat_interval }
    }
}

impl Default for HelloPayload {
    fn default() -> Self {
        Self::new()
    }
}

/// Identify payload (op 2)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifyPayload {
    /// Anonymous identity token; optional for the display role
    #[serde(default)]
    pub token: Option<String>,
    /// View role name (input, display, admin)
    #[serde(default)]
    pub view: Option<String>,
}
