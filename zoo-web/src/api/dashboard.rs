use crate::middleware::RequestContext;
use actix_web::web;
use zoo_error::{web::WebError, WebResult};
use zoo_models::{
    domain::prelude::DashboardInfo,
    enums::common::EntityType,
    web::WebResponse,
};
use zoo_repository::{
    AnimalRepository, BlogRepository, CategoryRepository, FeedbackRepository, ProfileRepository,
    ZoneRepository,
};

pub(super) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/dashboard", web::get().to(index));
}

/// Dashboard context for any authenticated user
///
/// # Endpoint
/// `GET /dashboard`
///
/// # Description
/// The requester's role, entity counts, recent and most-viewed records, and
/// per-category chart data.
async fn index(ctx: RequestContext) -> WebResult<WebResponse<DashboardInfo>> {
    let user_id = ctx.user_id()?;

    let Some(role) = ProfileRepository::find_role_by_user_id(user_id).await? else {
        return Err(WebError::NotFound(EntityType::Profile.to_string()));
    };

    let categories = CategoryRepository::find_all().await?;
    let mut category_labels = Vec::with_capacity(categories.len());
    let mut category_counts = Vec::with_capacity(categories.len());
    for category in &categories {
        category_counts.push(AnimalRepository::count_by_category(category.id).await?);
        category_labels.push(category.name.clone());
    }

    let recent_feedback = FeedbackRepository::find_with_user(Some(5))
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(WebResponse::ok(DashboardInfo {
        role,
        animal_count: AnimalRepository::count().await?,
        category_count: categories.len() as u64,
        zone_count: ZoneRepository::count().await?,
        blog_count: BlogRepository::count().await?,
        recent_animals: AnimalRepository::find_recent(5).await?,
        recent_blogs: BlogRepository::find_recent(5).await?,
        most_viewed_animals: AnimalRepository::find_most_viewed(5).await?,
        recent_feedback,
        category_labels,
        category_counts,
    }))
}
