use crate::entities::prelude::{FeedbackModel, UserModel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackPayload {
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
    #[serde(default = "FeedbackPayload::default_rating")]
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: i16,
}

impl FeedbackPayload {
    fn default_rating() -> i16 {
        5
    }
}

/// Feedback entry with the submitter resolved (None for deleted accounts).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackInfo {
    pub id: i32,
    pub user: Option<String>,
    pub message: String,
    pub rating: i16,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<(FeedbackModel, Option<UserModel>)> for FeedbackInfo {
    fn from((feedback, user): (FeedbackModel, Option<UserModel>)) -> Self {
        FeedbackInfo {
            id: feedback.id,
            user: user.map(|u| u.username),
            message: feedback.message,
            rating: feedback.rating,
            created_at: feedback.created_at,
        }
    }
}
