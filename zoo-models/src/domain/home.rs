use crate::{
    domain::{blog::BlogInfo, feedback::FeedbackInfo},
    entities::prelude::{AnimalModel, CategoryModel, FactModel},
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZooStats {
    pub animals: u64,
    pub categories: u64,
    pub zones: u64,
    pub quizzes: u64,
    pub blogs: u64,
    pub feedback: u64,
}

/// Context for the landing page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeInfo {
    pub featured: Vec<AnimalModel>,
    pub categories: Vec<CategoryModel>,
    pub facts: Vec<FactModel>,
    pub blogs: Vec<BlogInfo>,
    /// Search results when `q` was supplied
    pub animals: Option<Vec<AnimalModel>>,
    pub stats: ZooStats,
    pub feedbacks: Vec<FeedbackInfo>,
    pub year: i32,
}
