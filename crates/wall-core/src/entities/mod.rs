//! Domain entities

pub mod like;
pub mod message;
pub mod settings;

pub use like::{Like, LikeToggle};
pub use message::{Message, MAX_MESSAGE_LEN};
pub use settings::{DisplaySettings, InputSettings, WallSettings};
