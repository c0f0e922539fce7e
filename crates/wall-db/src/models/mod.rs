//! Database models (table rows)

pub mod like;
pub mod message;
pub mod settings;

pub use like::LikeModel;
pub use message::MessageModel;
pub use settings::SettingsModel;
