//! Configuration loading

pub mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ClassifierConfig, ConfigError, CorsConfig, DatabaseConfig, Environment,
    IdentityConfig, RedisConfig, ServerConfig, SnowflakeConfig,
};
