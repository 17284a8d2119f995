use actix_web::web;
use actix_web_validator::Json;
use chrono::Utc;
use sea_orm::{DatabaseConnection, Set};
use tracing::warn;
use zoo_common::{mailer::OutboundMail, ZooAppContext};
use zoo_error::{web::WebError, WebResult};
use zoo_models::{
    domain::prelude::{ContactOutcome, ContactRequest},
    entities::prelude::ContactMessageActiveModel,
    web::WebResponse,
};
use zoo_repository::ContactMessageRepository;

pub(super) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/contact", web::post().to(submit));
}

/// Contact form endpoint
///
/// # Endpoint
/// `POST /contact`
///
/// # Description
/// Persists the message, then notifies the configured recipient through the
/// mailer. Delivery failure is logged and never surfaced to the caller.
async fn submit(payload: Json<ContactRequest>) -> WebResult<WebResponse<ContactOutcome>> {
    let payload = payload.into_inner();

    let message = ContactMessageRepository::create::<DatabaseConnection>(
        ContactMessageActiveModel {
            name: Set(payload.name.clone()),
            email: Set(payload.email.clone()),
            subject: Set(payload.subject.clone()),
            urgency: Set(payload.urgency.clone()),
            message: Set(payload.message.clone()),
            created_at: Set(Some(Utc::now())),
            ..Default::default()
        },
        None,
    )
    .await?;

    let ctx = ZooAppContext::instance()
        .map_err(|_| WebError::InternalError("Application context unavailable".to_string()))?;

    let mail = OutboundMail {
        to: ctx.settings().contact.recipient.clone(),
        reply_to: Some(payload.email),
        subject: format!("[{}] {}", payload.urgency, payload.subject),
        body: format!("From {} <{}>:\n\n{}", payload.name, message.email, payload.message),
    };

    let sent = match ctx.mailer().send(mail).await {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "contact notification failed");
            false
        }
    };

    Ok(WebResponse::ok(ContactOutcome { sent }))
}
