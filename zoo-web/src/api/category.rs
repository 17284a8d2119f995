use crate::{rbac::has_any_role, AppState};
use actix_web::{http::Method, web};
use actix_web_validator::{Json, Path};
use sea_orm::{DatabaseConnection, Set};
use std::sync::Arc;
use tracing::{info, instrument};
use zoo_common::perm::ZooPermChecker;
use zoo_error::{rbac::RbacError, web::WebError, WebResult};
use zoo_models::{
    domain::prelude::{CategoryAnimals, NewCategory, SlugPath},
    entities::prelude::{CategoryActiveModel, CategoryModel},
    enums::common::{EntityType, Operation, Role},
    web::WebResponse,
};
use zoo_repository::{AnimalRepository, CategoryRepository};
use zoo_utils::slug::slugify;

pub(super) fn configure_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/categories", web::get().to(list))
        .route("/category/{slug}", web::get().to(detail));
}

pub(super) fn configure_protected_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/categories", web::post().to(create));
}

/// Initialize RBAC rules for category management
#[inline]
#[instrument(name = "init-category-rbac", skip_all)]
pub(super) async fn init_rbac_rules(perm_checker: &ZooPermChecker) -> WebResult<(), RbacError> {
    info!("Initializing category module RBAC rules...");

    perm_checker
        .register(
            Method::POST,
            "/categories".to_string(),
            has_any_role(&[Role::Admin, Role::Zookeeper])?,
        )
        .await?;

    info!("Category module RBAC rules initialized successfully");
    Ok(())
}

async fn list() -> WebResult<WebResponse<Vec<CategoryModel>>> {
    Ok(WebResponse::ok(CategoryRepository::find_all().await?))
}

/// Category page: the category plus its animals (404 on unknown slug)
async fn detail(params: Path<SlugPath>) -> WebResult<WebResponse<CategoryAnimals>> {
    let Some(category) = CategoryRepository::find_by_slug(&params.slug).await? else {
        return Err(WebError::NotFound(EntityType::Category.to_string()));
    };
    let animals = AnimalRepository::find_by_category(category.id).await?;
    Ok(WebResponse::ok(CategoryAnimals { category, animals }))
}

/// Create a category, deriving the slug from the name when not supplied
async fn create(
    payload: Json<NewCategory>,
    state: web::Data<Arc<AppState>>,
) -> WebResult<WebResponse<CategoryModel>> {
    let payload = payload.into_inner();

    let slug = match payload.slug.as_deref().map(str::trim) {
        Some(slug) if !slug.is_empty() => slug.to_string(),
        _ => slugify(&payload.name),
    };

    let category = CategoryActiveModel {
        name: Set(payload.name),
        description: Set(payload.description),
        slug: Set(slug),
        ..Default::default()
    };

    state
        .validator
        .validate(&category, Operation::Create)
        .await?;

    let category = CategoryRepository::create::<DatabaseConnection>(category, None).await?;
    Ok(WebResponse::ok(category))
}
