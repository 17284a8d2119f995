use crate::middleware::RequestContext;
use actix_web::web;
use actix_web_validator::Path;
use zoo_error::{web::WebError, WebResult};
use zoo_models::{
    domain::prelude::{FavoriteInfo, PathId},
    enums::common::EntityType,
    web::WebResponse,
};
use zoo_repository::{AnimalRepository, FavoriteRepository};

pub(super) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/animal/{id}/favorite", web::post().to(toggle))
        .route("/favorites", web::get().to(list));
}

/// Toggle the (user, animal) favorite; responds with the resulting state
async fn toggle(ctx: RequestContext, params: Path<PathId>) -> WebResult<WebResponse<bool>> {
    let user_id = ctx.user_id()?;

    if AnimalRepository::find_by_id(params.id).await?.is_none() {
        return Err(WebError::NotFound(EntityType::Animal.to_string()));
    }

    let favorited = FavoriteRepository::toggle(user_id, params.id).await?;
    Ok(WebResponse::ok(favorited))
}

/// The requester's favorites with their animals
async fn list(ctx: RequestContext) -> WebResult<WebResponse<Vec<FavoriteInfo>>> {
    let user_id = ctx.user_id()?;

    let favorites = FavoriteRepository::find_by_user_with_animals(user_id)
        .await?
        .into_iter()
        .filter_map(|(favorite, animal)| {
            animal.map(|animal| FavoriteInfo {
                favorite_id: favorite.id,
                animal,
            })
        })
        .collect();

    Ok(WebResponse::ok(favorites))
}
