//! Value objects - immutable domain primitives

pub mod mood;
pub mod snowflake;

pub use mood::{MoodAxis, Rgb, ScoreVector};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
