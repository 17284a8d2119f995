use crate::{
    domain::feedback::FeedbackInfo,
    entities::prelude::{AnimalModel, BlogModel},
    enums::common::Role,
};
use serde::Serialize;

/// Context for the authenticated dashboard page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardInfo {
    pub role: Role,
    pub animal_count: u64,
    pub category_count: u64,
    pub zone_count: u64,
    pub blog_count: u64,
    pub recent_animals: Vec<AnimalModel>,
    pub recent_blogs: Vec<BlogModel>,
    pub most_viewed_animals: Vec<AnimalModel>,
    pub recent_feedback: Vec<FeedbackInfo>,
    /// Chart data: one label and one animal count per category
    pub category_labels: Vec<String>,
    pub category_counts: Vec<u64>,
}
