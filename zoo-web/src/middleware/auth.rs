//! Authentication middleware for handling bearer token authentication.
//! Validates JWTs and attaches the verified claims to the request.

use actix_service::{Service, Transform};
use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    error::ErrorInternalServerError,
    http::{header::AUTHORIZATION, Method},
    Error, HttpMessage, HttpRequest, HttpResponse,
};
use futures::{
    future::{ok, LocalBoxFuture, Ready},
    FutureExt,
};
use jsonwebtoken::{Algorithm, Validation};
use std::{
    cell::RefCell,
    rc::Rc,
    task::{Context, Poll},
};
use zoo_common::ZooAppContext;
use zoo_models::{
    constants::BEARER_TOKEN, domain::prelude::Claims, settings::Settings, web::WebResponse,
};
use zoo_utils::jwt::decode_jwt;

/// Authentication middleware factory.
///
/// Implements the `Transform` trait to turn services into authenticated
/// services.
pub struct Authentication;

impl<S, B> Transform<S, ServiceRequest> for Authentication
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticationMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthenticationMiddleware {
            service: Rc::new(RefCell::new(service)),
        })
    }
}

/// Authentication middleware implementation.
///
/// 1. Extracts the bearer token from the Authorization header
/// 2. Validates the token signature and issuer
/// 3. Attaches the verified claims for downstream authorization
pub struct AuthenticationMiddleware<S> {
    service: Rc<RefCell<S>>,
}

impl<S, B> Service<ServiceRequest> for AuthenticationMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = S::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        async move {
            // Fast path for OPTIONS requests
            if Method::OPTIONS == req.method() {
                return srv.call(req).await.map(|res| res.map_into_left_body());
            }

            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    return Ok(req
                        .into_response(HttpResponse::Unauthorized().json(WebResponse::<()>::error(
                            "Invalid token, please login again",
                        )))
                        .map_into_right_body())
                }
            };

            let settings = get_settings()?;

            let claims = match decode_claims(token, &settings) {
                Some(claims) => claims,
                None => {
                    return Ok(req
                        .into_response(HttpResponse::Unauthorized().json(WebResponse::<()>::error(
                            "Invalid token, please login again",
                        )))
                        .map_into_right_body())
                }
            };

            // Insert grant info for authorization
            req.extensions_mut().insert(claims);

            srv.call(req).await.map(|res| res.map_into_left_body())
        }
        .boxed_local()
    }
}

/// Extracts the bearer token from the request headers.
#[inline]
fn extract_bearer_token(req: &ServiceRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_TOKEN)
        .map(str::trim)
}

/// Decodes and validates a token, checking signature and issuer.
#[inline]
fn decode_claims(token: &str, settings: &Settings) -> Option<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;
    validation.set_issuer(&[&settings.web.jwt.issuer]);

    decode_jwt::<Claims>(token, settings.web.jwt.secret.as_bytes(), Some(validation))
        .map(|td| td.claims)
        .ok()
}

/// Best-effort claims for public routes that personalize their response
/// when a valid token happens to be present.
pub(crate) fn optional_claims(req: &HttpRequest) -> Option<Claims> {
    let token = req
        .headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_TOKEN)
        .map(str::trim)?;
    let settings = ZooAppContext::instance().ok()?.settings();
    decode_claims(token, settings)
}

/// Retrieves the settings from the application context.
#[inline]
fn get_settings() -> Result<Settings, Error> {
    ZooAppContext::instance()
        .map(|ctx| ctx.settings().clone())
        .map_err(ErrorInternalServerError)
}
