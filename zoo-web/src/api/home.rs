use actix_web::web;
use actix_web_validator::Query;
use chrono::{Datelike, Utc};
use zoo_error::WebResult;
use zoo_models::{
    domain::prelude::{HomeInfo, SearchParams, ZooStats},
    web::WebResponse,
};
use zoo_repository::{
    AnimalRepository, BlogRepository, CategoryRepository, FactRepository, FeedbackRepository,
    QuizRepository, ZoneRepository,
};

pub(super) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index));
}

/// Landing page context
///
/// # Endpoint
/// `GET /?q=`
///
/// # Description
/// Featured animals, catalog summaries, latest approved blogs and feedback,
/// plus search results when `q` is given.
async fn index(params: Query<SearchParams>) -> WebResult<WebResponse<HomeInfo>> {
    let featured = AnimalRepository::find_recent(6).await?;
    let categories = CategoryRepository::find_all().await?;
    let facts = FactRepository::find_recent(3).await?;
    let blogs = BlogRepository::find_approved_with_author(Some(3))
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    let feedbacks = FeedbackRepository::find_with_user(Some(5))
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let animals = match params.q.as_deref().map(str::trim) {
        Some(q) if !q.is_empty() => Some(AnimalRepository::search(q).await?),
        _ => None,
    };

    let stats = ZooStats {
        animals: AnimalRepository::count().await?,
        categories: CategoryRepository::count().await?,
        zones: ZoneRepository::count().await?,
        quizzes: QuizRepository::count().await?,
        blogs: BlogRepository::count().await?,
        feedback: FeedbackRepository::count().await?,
    };

    Ok(WebResponse::ok(HomeInfo {
        featured,
        categories,
        facts,
        blogs,
        animals,
        stats,
        feedbacks,
        year: Utc::now().year(),
    }))
}
