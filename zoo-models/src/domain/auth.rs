use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(required(message = "username is required"))]
    pub username: Option<String>,
    #[validate(required(message = "password is required"))]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoginResponse {
    pub user_id: String,
    pub username: String,
    pub token: String,
    pub expires_at: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub jti: String,
    pub sub: String,
    pub iss: String,
    pub exp: i64,
    pub nbf: i64,
    pub iat: i64,
    pub user_id: String,
    pub username: String,
}

impl Claims {
    pub fn new(iss: String, user_id: String, username: String, expire_secs: i64) -> Self {
        let jti = Uuid::new_v4().into();
        let now = Utc::now();
        Self {
            jti,
            sub: user_id.clone(),
            iss,
            exp: now.timestamp() + expire_secs,
            nbf: now.timestamp(),
            iat: now.timestamp(),
            user_id,
            username,
        }
    }
}
