pub(crate) mod auth;
pub(crate) mod authz;
pub(crate) mod cors;

use actix_web::{dev::Payload, Error, FromRequest, HttpMessage, HttpRequest};
use futures::future::{ready, Ready};
use zoo_error::{web::WebError, WebResult};
use zoo_models::domain::prelude::Claims;

/// Per-request view of the authenticated caller, filled in by the
/// authentication middleware.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub grant: Option<Claims>,
}

impl RequestContext {
    /// The verified claims, or 401 when the route was reached without them.
    pub fn claims(&self) -> WebResult<&Claims> {
        self.grant.as_ref().ok_or(WebError::Unauthorized)
    }

    /// The requester's numeric user id.
    pub fn user_id(&self) -> WebResult<i32> {
        self.claims()?
            .user_id
            .parse::<i32>()
            .map_err(|_| WebError::Unauthorized)
    }
}

impl FromRequest for RequestContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let mut ctx = RequestContext::default();
        if let Some(grant) = req.extensions().get::<Claims>().cloned() {
            ctx.grant = Some(grant);
        }
        ready(Ok(ctx))
    }
}
