use crate::{middleware::RequestContext, rbac::has_any_role};
use actix_web::{http::Method, web};
use actix_web_validator::Json;
use chrono::Utc;
use sea_orm::{DatabaseConnection, Set};
use tracing::{info, instrument};
use zoo_common::perm::ZooPermChecker;
use zoo_error::{rbac::RbacError, WebResult};
use zoo_models::{
    domain::prelude::{FeedbackInfo, FeedbackPayload},
    entities::prelude::FeedbackActiveModel,
    enums::common::Role,
    web::WebResponse,
};
use zoo_repository::FeedbackRepository;

pub(super) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/feedback", web::post().to(submit))
        .route("/admin/feedback", web::get().to(list));
}

/// Initialize RBAC rules for feedback review
#[inline]
#[instrument(name = "init-feedback-rbac", skip_all)]
pub(super) async fn init_rbac_rules(perm_checker: &ZooPermChecker) -> WebResult<(), RbacError> {
    info!("Initializing feedback module RBAC rules...");

    perm_checker
        .register(
            Method::GET,
            "/admin/feedback".to_string(),
            has_any_role(&[Role::Admin])?,
        )
        .await?;

    info!("Feedback module RBAC rules initialized successfully");
    Ok(())
}

/// Submit feedback as the authenticated user
async fn submit(
    ctx: RequestContext,
    payload: Json<FeedbackPayload>,
) -> WebResult<WebResponse<FeedbackInfo>> {
    let user_id = ctx.user_id()?;
    let payload = payload.into_inner();

    let feedback = FeedbackRepository::create::<DatabaseConnection>(
        FeedbackActiveModel {
            user_id: Set(Some(user_id)),
            message: Set(payload.message),
            rating: Set(payload.rating),
            created_at: Set(Some(Utc::now())),
            ..Default::default()
        },
        None,
    )
    .await?;

    let username = ctx.claims()?.username.clone();
    Ok(WebResponse::ok(FeedbackInfo {
        id: feedback.id,
        user: Some(username),
        message: feedback.message,
        rating: feedback.rating,
        created_at: feedback.created_at,
    }))
}

/// Review queue, newest first, with submitting users resolved
async fn list() -> WebResult<WebResponse<Vec<FeedbackInfo>>> {
    let feedback = FeedbackRepository::find_with_user(None)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(WebResponse::ok(feedback))
}
