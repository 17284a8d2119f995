use crate::{middleware::RequestContext, rbac::has_any_role};
use actix_web::{http::Method, web};
use actix_web_validator::{Json, Path};
use chrono::Utc;
use sea_orm::{DatabaseConnection, Set};
use tracing::{info, instrument};
use zoo_common::perm::ZooPermChecker;
use zoo_error::{rbac::RbacError, web::WebError, WebResult};
use zoo_models::{
    domain::prelude::{BlogInfo, BlogPayload, PathId},
    entities::prelude::BlogActiveModel,
    enums::common::{EntityType, Role},
    web::WebResponse,
};
use zoo_repository::{BlogRepository, UserRepository};

pub(super) fn configure_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/blogs", web::get().to(list))
        .route("/blogs/{id}", web::get().to(detail));
}

// The authorization middleware resolves patterns by path alone, so a gated
// path must never sit inside a broader public pattern. Creation lives on the
// collection path: "/blogs/add" would resolve to the public "/blogs/{id}".
pub(super) fn configure_protected_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/blogs", web::post().to(create))
        .route("/blogs/{id}/edit", web::post().to(update))
        .route("/blogs/{id}/delete", web::post().to(delete));
}

/// Initialize RBAC rules for the blog authoring routes
#[inline]
#[instrument(name = "init-blog-rbac", skip_all)]
pub(super) async fn init_rbac_rules(perm_checker: &ZooPermChecker) -> WebResult<(), RbacError> {
    info!("Initializing blog module RBAC rules...");

    const AUTHORS: &[Role] = &[Role::Educator];

    perm_checker
        .register(Method::POST, "/blogs".to_string(), has_any_role(AUTHORS)?)
        .await?;
    perm_checker
        .register(
            Method::POST,
            "/blogs/{id}/edit".to_string(),
            has_any_role(AUTHORS)?,
        )
        .await?;
    perm_checker
        .register(
            Method::POST,
            "/blogs/{id}/delete".to_string(),
            has_any_role(AUTHORS)?,
        )
        .await?;

    info!("Blog module RBAC rules initialized successfully");
    Ok(())
}

/// Approved posts only, newest first
async fn list() -> WebResult<WebResponse<Vec<BlogInfo>>> {
    let blogs = BlogRepository::find_approved_with_author(None)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(WebResponse::ok(blogs))
}

/// Single post with the author's name resolved (404 if missing)
async fn detail(params: Path<PathId>) -> WebResult<WebResponse<BlogInfo>> {
    let Some(blog) = BlogRepository::find_by_id(params.id).await? else {
        return Err(WebError::NotFound(EntityType::Blog.to_string()));
    };
    let author = match blog.author_id {
        Some(author_id) => UserRepository::find_by_id(author_id).await?,
        None => None,
    };
    Ok(WebResponse::ok(BlogInfo::from((blog, author))))
}

/// New posts start unapproved and belong to the requester
async fn create(
    ctx: RequestContext,
    payload: Json<BlogPayload>,
) -> WebResult<WebResponse<BlogInfo>> {
    let author_id = ctx.user_id()?;
    let payload = payload.into_inner();

    let blog = BlogRepository::create::<DatabaseConnection>(
        BlogActiveModel {
            title: Set(payload.title),
            content: Set(payload.content),
            author_id: Set(Some(author_id)),
            date_posted: Set(Some(Utc::now())),
            approved: Set(false),
            ..Default::default()
        },
        None,
    )
    .await?;

    let author = UserRepository::find_by_id(author_id).await?;
    Ok(WebResponse::ok(BlogInfo::from((blog, author))))
}

/// Edit the requester's own post (404 for anyone else's)
async fn update(
    ctx: RequestContext,
    params: Path<PathId>,
    payload: Json<BlogPayload>,
) -> WebResult<WebResponse<BlogInfo>> {
    let author_id = ctx.user_id()?;
    if BlogRepository::find_by_id_and_author(params.id, author_id)
        .await?
        .is_none()
    {
        return Err(WebError::NotFound(EntityType::Blog.to_string()));
    }

    let payload = payload.into_inner();
    let blog = BlogRepository::update::<DatabaseConnection>(
        BlogActiveModel {
            id: Set(params.id),
            title: Set(payload.title),
            content: Set(payload.content),
            ..Default::default()
        },
        None,
    )
    .await?;

    let author = UserRepository::find_by_id(author_id).await?;
    Ok(WebResponse::ok(BlogInfo::from((blog, author))))
}

/// Delete the requester's own post (404 for anyone else's)
async fn delete(ctx: RequestContext, params: Path<PathId>) -> WebResult<WebResponse<()>> {
    let author_id = ctx.user_id()?;
    if BlogRepository::find_by_id_and_author(params.id, author_id)
        .await?
        .is_none()
    {
        return Err(WebError::NotFound(EntityType::Blog.to_string()));
    }

    BlogRepository::delete::<DatabaseConnection>(params.id, None).await?;
    Ok(WebResponse::<()>::ok_empty())
}
