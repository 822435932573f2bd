use crate::config::SmtpConfig;
use crate::error::QuizError;
use crate::mail::{Mailer, OutgoingMail};
use futures::future::{BoxFuture, FutureExt};
use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

/// Sends through a configured SMTP relay. No retry, no queue.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpMailer {
    pub fn from_config(cfg: &SmtpConfig) -> Result<Self, QuizError> {
        let mut builder = if cfg.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&cfg.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&cfg.host)
        };
        builder = builder.port(cfg.port);
        if !cfg.username.is_empty() {
            builder = builder.credentials(Credentials::new(
                cfg.username.clone(),
                cfg.password.clone(),
            ));
        }

        Ok(Self {
            transport: builder.build(),
            sender: cfg.sender.parse()?,
        })
    }

    fn build_message(&self, mail: &OutgoingMail) -> Result<Message, QuizError> {
        let to: Mailbox = mail.to.parse()?;
        let message = Message::builder()
            .from(self.sender.clone())
            .to(to)
            .subject(mail.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(mail.body.clone())?;
        Ok(message)
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, mail: OutgoingMail) -> BoxFuture<'_, Result<(), QuizError>> {
        async move {
            let message = self.build_message(&mail)?;
            let resp = self.transport.send(message).await?;
            info!(
                to = %mail.to,
                subject = %mail.subject,
                code = %resp.code(),
                "mail accepted by relay"
            );
            Ok(())
        }
        .boxed()
    }
}
