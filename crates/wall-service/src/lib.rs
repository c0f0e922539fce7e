//! # wall-service
//!
//! Application layer: services, the sentiment classifier client, and DTOs.

pub mod classifier;
pub mod dto;
pub mod services;

pub use classifier::{Classification, ClassifierError, SentimentClassifier};
pub use dto::{
    ClearedResponse, IdentifyRequest, IdentityResponse, LikeToggleResponse, LikedMessagesResponse,
    MessageResponse, MoodSummaryResponse, SubmissionReceiptResponse, SubmitMessageRequest,
    UpdateSettingsRequest,
};
pub use services::{
    AdminService, LikeService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    SettingsService, SubmissionService,
};
