use crate::{entities::prelude::AnimalModel, enums::common::Role};
use serde::{Deserialize, Serialize};
use serde_aux::prelude::*;
use validator::Validate;

/// Registration form payload.
///
/// Field rules mirror the account form: unique username (checked by the
/// duplicate validator), email format, minimum password length and a
/// matching confirmation, optional positive age.
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 150, message = "username must be 3-150 characters"))]
    pub username: String,
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "passwords do not match"))]
    pub password_confirm: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    #[validate(range(min = 1, message = "age must be a positive integer"))]
    pub age: Option<i32>,
}

/// A favorite together with the animal it points at.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteInfo {
    pub favorite_id: i32,
    pub animal: AnimalModel,
}
