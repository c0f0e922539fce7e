//! # wall-common
//!
//! Shared utilities: configuration, application errors, anonymous identity
//! tokens, and telemetry setup.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

pub use auth::{IdentityClaims, IdentityService, IdentityToken};
pub use config::{
    AppConfig, AppSettings, ClassifierConfig, ConfigError, CorsConfig, DatabaseConfig, Environment,
    IdentityConfig, RedisConfig, ServerConfig, SnowflakeConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig, TracingError};
