//! Outbound mail: a `Mailer` seam plus the SMTP-backed implementation.

mod smtp;

pub use smtp::SmtpMailer;

use crate::error::QuizError;
use futures::future::BoxFuture;

/// A single plain-text message to one recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl OutgoingMail {
    pub fn new(
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Delivers mail synchronously from the caller's point of view: the returned
/// future resolves once the relay has accepted (or refused) the message.
pub trait Mailer: Send + Sync {
    fn send(&self, mail: OutgoingMail) -> BoxFuture<'_, Result<(), QuizError>>;
}
