use crate::middleware::auth::optional_claims;
use crate::rbac::has_any_role;
use actix_web::{http::Method, web, HttpRequest};
use actix_web_validator::{Json, Path, Query};
use tracing::{info, instrument};
use zoo_common::perm::ZooPermChecker;
use zoo_error::{rbac::RbacError, web::WebError, WebResult};
use zoo_models::{
    domain::prelude::{AnimalDetail, AnimalPayload, PathId, SearchParams},
    entities::prelude::AnimalModel,
    enums::common::{EntityType, Role},
    web::WebResponse,
};
use zoo_repository::{AnimalRepository, FavoriteRepository};
use sea_orm::{ActiveValue, DatabaseConnection, IntoActiveModel};

pub(super) fn configure_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/animals", web::get().to(list))
        .route("/animal/{id}", web::get().to(detail));
}

pub(super) fn configure_protected_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/manage-animals", web::get().to(manage_list))
        .route("/animals/add", web::post().to(create))
        .route("/animals/{id}/edit", web::post().to(update))
        .route("/animals/{id}/delete", web::post().to(delete));
}

/// Initialize RBAC rules for the animal catalog management routes
#[inline]
#[instrument(name = "init-animal-rbac", skip_all)]
pub(super) async fn init_rbac_rules(perm_checker: &ZooPermChecker) -> WebResult<(), RbacError> {
    info!("Initializing animal module RBAC rules...");

    const MANAGERS: &[Role] = &[Role::Admin, Role::Zookeeper];

    perm_checker
        .register(
            Method::GET,
            "/manage-animals".to_string(),
            has_any_role(MANAGERS)?,
        )
        .await?;
    perm_checker
        .register(
            Method::POST,
            "/animals/add".to_string(),
            has_any_role(MANAGERS)?,
        )
        .await?;
    perm_checker
        .register(
            Method::POST,
            "/animals/{id}/edit".to_string(),
            has_any_role(MANAGERS)?,
        )
        .await?;
    perm_checker
        .register(
            Method::POST,
            "/animals/{id}/delete".to_string(),
            has_any_role(MANAGERS)?,
        )
        .await?;

    info!("Animal module RBAC rules initialized successfully");
    Ok(())
}

/// Public catalog listing, optionally filtered by a name/species search
async fn list(params: Query<SearchParams>) -> WebResult<WebResponse<Vec<AnimalModel>>> {
    let animals = match params.q.as_deref().map(str::trim) {
        Some(q) if !q.is_empty() => AnimalRepository::search(q).await?,
        _ => AnimalRepository::find_all().await?,
    };
    Ok(WebResponse::ok(animals))
}

/// Animal detail page
///
/// # Endpoint
/// `GET /animal/{id}`
///
/// # Description
/// Resolves the animal with its category and zone, bumps the view counter
/// once per request, and reports whether the caller has favorited it.
async fn detail(
    params: Path<PathId>,
    req: HttpRequest,
) -> WebResult<WebResponse<AnimalDetail>> {
    let Some((mut animal, category, zone)) = AnimalRepository::find_detail(params.id).await? else {
        return Err(WebError::NotFound(EntityType::Animal.to_string()));
    };

    AnimalRepository::increment_view_count(animal.id).await?;
    animal.view_count += 1;

    let is_favorite = match optional_claims(&req).and_then(|c| c.user_id.parse::<i32>().ok()) {
        Some(user_id) => FavoriteRepository::is_favorite(user_id, animal.id).await?,
        None => false,
    };

    Ok(WebResponse::ok(AnimalDetail {
        animal,
        category,
        zone,
        is_favorite,
    }))
}

/// Management listing, newest animals first
async fn manage_list() -> WebResult<WebResponse<Vec<AnimalModel>>> {
    Ok(WebResponse::ok(AnimalRepository::find_all_recent().await?))
}

/// Create an animal record
async fn create(payload: Json<AnimalPayload>) -> WebResult<WebResponse<AnimalModel>> {
    let mut animal = payload.into_inner().into_active_model();
    animal.created_at = ActiveValue::Set(Some(chrono::Utc::now()));
    let animal = AnimalRepository::create::<DatabaseConnection>(animal, None).await?;
    Ok(WebResponse::ok(animal))
}

/// Update an animal record (404 on missing id)
async fn update(
    params: Path<PathId>,
    payload: Json<AnimalPayload>,
) -> WebResult<WebResponse<AnimalModel>> {
    if AnimalRepository::find_by_id(params.id).await?.is_none() {
        return Err(WebError::NotFound(EntityType::Animal.to_string()));
    }

    let mut animal = payload.into_inner().into_active_model();
    animal.id = ActiveValue::Set(params.id);
    let animal = AnimalRepository::update::<DatabaseConnection>(animal, None).await?;
    Ok(WebResponse::ok(animal))
}

/// Delete an animal record (404 on missing id)
async fn delete(params: Path<PathId>) -> WebResult<WebResponse<()>> {
    if AnimalRepository::find_by_id(params.id).await?.is_none() {
        return Err(WebError::NotFound(EntityType::Animal.to_string()));
    }

    AnimalRepository::delete::<DatabaseConnection>(params.id, None).await?;
    Ok(WebResponse::<()>::ok_empty())
}
