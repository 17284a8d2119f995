//! Health check endpoint for load balancers and liveness probes.

use actix_web::{web, HttpResponse};

pub(super) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().body("OK")
}
