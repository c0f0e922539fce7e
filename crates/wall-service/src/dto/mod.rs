//! Request and response DTOs

pub mod requests;
pub mod responses;

pub use requests::{
    DisplaySettingsRequest, IdentifyRequest, InputSettingsRequest, SubmitMessageRequest,
    UpdateSettingsRequest,
};
pub use responses::{
    ClearedResponse, IdentityResponse, LikeToggleResponse, LikedMessagesResponse, MessageResponse,
    MoodSummaryResponse, SubmissionReceiptResponse,
};
