use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 60, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, max = 120, message = "subject is required"))]
    pub subject: String,
    #[serde(default = "ContactRequest::default_urgency")]
    pub urgency: String,
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
}

impl ContactRequest {
    fn default_urgency() -> String {
        "Normal".to_string()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactOutcome {
    pub sent: bool,
}
