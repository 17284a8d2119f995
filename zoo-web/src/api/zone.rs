use actix_web::web;
use zoo_error::WebResult;
use zoo_models::{entities::prelude::ZoneModel, web::WebResponse};
use zoo_repository::ZoneRepository;

pub(super) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/zones", web::get().to(list));
}

async fn list() -> WebResult<WebResponse<Vec<ZoneModel>>> {
    Ok(WebResponse::ok(ZoneRepository::find_all().await?))
}
