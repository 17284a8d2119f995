use crate::AppState;
use actix_web::{web, HttpRequest};
use actix_web_validator::Json;
use chrono::Utc;
use sea_orm::Set;
use std::sync::Arc;
use zoo_common::ZooAppContext;
use zoo_error::{web::WebError, WebResult};
use zoo_models::{
    domain::prelude::{Claims, LoginRequest, LoginResponse, RegisterRequest},
    entities::prelude::{UserActiveModel, UserModel},
    enums::common::{EntityType, Operation},
    settings::Settings,
    web::WebResponse,
};
use zoo_repository::UserRepository;
use zoo_utils::{
    hash::{bcrypt_check, bcrypt_hash},
    jwt::encode_jwt,
};

pub(super) fn configure_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::post().to(register))
        .route("/login", web::post().to(login));
}

pub(super) fn configure_protected_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/logout", web::post().to(logout));
}

/// Registration endpoint
///
/// # Endpoint
/// `POST /register`
///
/// # Description
/// Creates a user and its profile in one transaction and responds with a
/// fresh login payload, so a successful registration is already logged in.
async fn register(
    req: Json<RegisterRequest>,
    state: web::Data<Arc<AppState>>,
) -> WebResult<WebResponse<LoginResponse>> {
    let req = req.into_inner();

    let user = UserActiveModel {
        username: Set(req.username),
        email: Set(req.email),
        password: Set(bcrypt_hash(&req.password)),
        created_at: Set(Some(Utc::now())),
        ..Default::default()
    };

    state.validator.validate(&user, Operation::Create).await?;

    let user = UserRepository::create_with_profile(user, req.role, req.age).await?;

    let settings = get_settings()?;
    Ok(WebResponse::ok(issue_token(&user, &settings)?))
}

/// Login endpoint
///
/// # Endpoint
/// `POST /login`
///
/// # Description
/// Verifies the credentials against the stored bcrypt hash and issues a
/// signed JWT.
pub(super) async fn login(req: Json<LoginRequest>) -> WebResult<WebResponse<LoginResponse>> {
    // `required` validation guarantees both fields are present here
    let username = req.username.as_deref().unwrap_or_default();
    let password = req.password.as_deref().unwrap_or_default();

    let user = match UserRepository::find_by_username(username).await? {
        Some(user) => user,
        None => return Err(WebError::NotFound(EntityType::User.to_string())),
    };

    if !bcrypt_check(password, &user.password) {
        return Err(WebError::Unauthorized);
    }

    let settings = get_settings()?;
    Ok(WebResponse::ok(issue_token(&user, &settings)?))
}

/// Logout endpoint
///
/// # Endpoint
/// `POST /logout`
///
/// # Description
/// Tokens are stateless, so logout is an acknowledgment for the client to
/// drop its copy.
async fn logout(_req: HttpRequest) -> WebResult<WebResponse<bool>> {
    Ok(WebResponse::ok(true))
}

fn issue_token(user: &UserModel, settings: &Settings) -> WebResult<LoginResponse> {
    let claims = Claims::new(
        settings.web.jwt.issuer.clone(),
        user.id.to_string(),
        user.username.clone(),
        settings.web.jwt.expire,
    );

    let token = encode_jwt(&claims, settings.web.jwt.secret.as_bytes(), None)
        .map_err(|_| WebError::InternalError("Failed to encode JWT".to_string()))?;

    Ok(LoginResponse {
        user_id: claims.user_id,
        username: claims.username,
        token,
        expires_at: claims.exp,
    })
}

fn get_settings() -> WebResult<Settings> {
    Ok(ZooAppContext::instance()
        .map_err(|_| WebError::InternalError("Failed to get settings".to_string()))?
        .settings()
        .clone())
}
