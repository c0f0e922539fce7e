//! Application services

pub mod admin;
pub mod context;
pub mod error;
pub mod like;
pub mod settings;
pub mod submission;

pub use admin::{AdminService, MoodSummary};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use like::LikeService;
pub use settings::SettingsService;
pub use submission::{SubmissionReceipt, SubmissionService};
