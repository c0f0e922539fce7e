//! # wall-db
//!
//! Database layer - PostgreSQL repositories, models, and mappers.

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

pub use pool::{create_pool, create_pool_from_env, DatabaseConfig};
pub use repositories::{PgLikeRepository, PgMessageRepository, PgSettingsRepository};
pub use sqlx::PgPool;
