//! Router module for handling all API routes.

mod animal;
mod auth;
mod blog;
mod category;
mod contact;
mod dashboard;
mod favorite;
mod feedback;
mod health;
mod home;
mod quiz;
mod zone;

use crate::{
    middleware::{auth::Authentication, authz::Authorization},
    validation::EntityValidator,
};
use actix_web::web;
use std::sync::Arc;
use tracing::{info, instrument};
use zoo_common::perm::ZooPermChecker;
use zoo_error::{rbac::RbacError, ZooResult};

/// Configure all routes: public first, then the authenticated scope.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_public_routes)
        .configure(configure_protected_routes);
}

/// Public routes that don't require authentication
fn configure_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(home::configure_routes)
        .configure(auth::configure_public_routes)
        .configure(animal::configure_public_routes)
        .configure(category::configure_public_routes)
        .configure(zone::configure_routes)
        .configure(blog::configure_public_routes)
        .configure(quiz::configure_routes)
        .configure(contact::configure_routes);
}

/// Routes behind the authentication and authorization middleware
fn configure_protected_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("")
            .wrap(Authorization)
            .wrap(Authentication)
            .configure(auth::configure_protected_routes)
            .configure(dashboard::configure_routes)
            .configure(animal::configure_protected_routes)
            .configure(category::configure_protected_routes)
            .configure(blog::configure_protected_routes)
            .configure(feedback::configure_routes)
            .configure(favorite::configure_routes),
    );
}

/// Initialize all RBAC rules for the application.
/// This should be called once during application startup.
#[inline]
#[instrument(name = "init-rbac-rules", skip_all)]
pub async fn init_rbac_rules(perm_checker: &ZooPermChecker) -> ZooResult<(), RbacError> {
    info!("Initializing all RBAC rules for protected routes...");

    animal::init_rbac_rules(perm_checker).await?;
    category::init_rbac_rules(perm_checker).await?;
    blog::init_rbac_rules(perm_checker).await?;
    feedback::init_rbac_rules(perm_checker).await?;

    info!("All RBAC rules initialized successfully");
    Ok(())
}

/// Collects additional entity validators from the API modules.
#[inline]
#[instrument(name = "collect-validators", skip_all)]
pub fn collect_additional_validators() -> Vec<Arc<dyn EntityValidator>> {
    Vec::new()
}
