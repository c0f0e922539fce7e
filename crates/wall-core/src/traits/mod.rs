//! Repository traits (ports)

pub mod repositories;

pub use repositories::{LikeRepository, MessageRepository, RepoResult, SettingsRepository};
