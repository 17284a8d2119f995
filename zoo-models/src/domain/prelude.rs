pub use super::animal::{AnimalDetail, AnimalPayload};
pub use super::auth::{Claims, LoginRequest, LoginResponse};
pub use super::blog::{BlogInfo, BlogPayload};
pub use super::category::{CategoryAnimals, NewCategory};
pub use super::common::{PathId, SearchParams, SlugPath};
pub use super::contact::{ContactOutcome, ContactRequest};
pub use super::dashboard::DashboardInfo;
pub use super::feedback::{FeedbackInfo, FeedbackPayload};
pub use super::home::{HomeInfo, ZooStats};
pub use super::quiz::{
    score_submission, QuizOutcome, QuizQuestion, QuizResult, QuizSubmission,
};
pub use super::user::{FavoriteInfo, RegisterRequest};
