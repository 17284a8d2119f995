use async_trait::async_trait;
use tracing::info;
use zoo_error::ZooResult;

/// A contact-form message ready for delivery.
#[derive(Debug, Clone)]
pub struct OutboundMail {
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub body: String,
}

/// Outbound mail delivery seam.
///
/// Actual delivery is an external concern, so handlers only depend on this
/// trait. The default implementation records the message in the log stream.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: OutboundMail) -> ZooResult<()>;
}

/// Mailer that writes each message to the application log.
#[derive(Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, mail: OutboundMail) -> ZooResult<()> {
        info!(
            to = %mail.to,
            reply_to = ?mail.reply_to,
            subject = %mail.subject,
            "outbound mail: {}",
            mail.body
        );
        Ok(())
    }
}
