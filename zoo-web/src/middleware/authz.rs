//! Authorization middleware enforcing the registered permission rules.

use actix_service::{Service, Transform};
use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    Error, HttpMessage, HttpResponse,
};
use futures::{
    future::{ok, LocalBoxFuture, Ready},
    FutureExt,
};
use std::{
    cell::RefCell,
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use zoo_models::{domain::prelude::Claims, web::WebResponse};

use crate::rbac::perm_checker;

/// Authorization middleware factory.
#[derive(Clone)]
pub struct Authorization;

impl<S, B> Transform<S, ServiceRequest> for Authorization
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthorizationMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthorizationMiddleware {
            service: Rc::new(RefCell::new(service)),
        })
    }
}

/// Authorization middleware implementation.
///
/// 1. Reads the claims left behind by the authentication middleware
/// 2. Evaluates the rule registered for the matched route pattern
/// 3. Passes, denies with 403, or fails with 500 on a broken rule
#[derive(Clone)]
pub struct AuthorizationMiddleware<S> {
    service: Rc<RefCell<S>>,
}

impl<S, B> Service<ServiceRequest> for AuthorizationMiddleware<S>
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
            let path = req.match_pattern().unwrap_or_default();
            let action = req.method().as_str();
            let option_grant = req.extensions().get::<Claims>().cloned();
            let claims = match option_grant {
                Some(value) => Arc::new(value),
                None => {
                    return Ok(req.into_response(
                        HttpResponse::Unauthorized()
                            .json(WebResponse::<()>::error("Authentication required"))
                            .map_into_right_body(),
                    ))
                }
            };
            match perm_checker().check(action, &path, claims).await {
                Ok(checked) => match checked {
                    true => srv.call(req).await.map(|res| res.map_into_left_body()),
                    false => Ok(req.into_response(
                        HttpResponse::Forbidden()
                            .json(WebResponse::<()>::error("Permission denied"))
                            .map_into_right_body(),
                    )),
                },
                Err(e) => {
                    let res = HttpResponse::InternalServerError()
                        .json(WebResponse::<()>::error(&e.to_string()))
                        .map_into_right_body();
                    Ok(req.into_response(res))
                }
            }
        }
        .boxed_local()
    }
}
