//! PostgreSQL repository implementations

pub mod error;
pub mod like;
pub mod message;
pub mod settings;

pub use like::PgLikeRepository;
pub use message::PgMessageRepository;
pub use settings::PgSettingsRepository;
