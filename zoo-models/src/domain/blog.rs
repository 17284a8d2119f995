use crate::entities::prelude::{BlogModel, UserModel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BlogPayload {
    #[validate(length(min = 1, max = 250, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
}

/// A blog post with its author's display name resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogInfo {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub date_posted: Option<DateTime<Utc>>,
    pub approved: bool,
}

impl From<(BlogModel, Option<UserModel>)> for BlogInfo {
    fn from((blog, author): (BlogModel, Option<UserModel>)) -> Self {
        BlogInfo {
            id: blog.id,
            title: blog.title,
            content: blog.content,
            author: author.map(|u| u.username),
            date_posted: blog.date_posted,
            approved: blog.approved,
        }
    }
}
