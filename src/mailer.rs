//! SMTP submission of the digest email.
//!
//! The mailer composes one message per run and submits it to the configured
//! relay over a STARTTLS-upgraded session, authenticated with the sender
//! credential. All recipients share a single envelope; submission is
//! all-or-nothing with no retry and no partial-recipient handling.
//!
//! A rejected authentication or an unreachable relay degrades the run
//! rather than failing it: the scheduler's view of the run stays clean and
//! the degradation is carried in the [`RunSummary`](crate::models::RunSummary).
//!
//! Construction requires a validated [`MailerConfig`], so a run can only
//! reach this module with a complete sender identity.

use crate::config::MailerConfig;
use crate::models::{Degradation, Outcome};
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{info, instrument, warn};

/// Sends the rendered digest through a mail relay.
pub struct SmtpMailer {
    relay_host: String,
    relay_port: u16,
    sender: Mailbox,
    credentials: Credentials,
    recipients: Vec<Mailbox>,
}

impl SmtpMailer {
    /// Build a mailer from validated configuration.
    pub fn from_config(config: &MailerConfig) -> Self {
        Self {
            relay_host: config.smtp_host.clone(),
            relay_port: config.smtp_port,
            sender: config.sender.clone(),
            credentials: Credentials::new(
                config.sender.email.to_string(),
                config.password.clone(),
            ),
            recipients: config.recipients.clone(),
        }
    }

    /// Compose the digest message: all recipients on one message, HTML body.
    fn compose(&self, subject: &str, html_body: String) -> Result<Message, lettre::error::Error> {
        let mut builder = Message::builder().from(self.sender.clone());
        for recipient in &self.recipients {
            builder = builder.to(recipient.clone());
        }
        builder
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body)
    }

    /// Submit the digest to the relay.
    ///
    /// Composition or transport failure is logged and returned as a
    /// [`Degradation`]; the caller decides nothing more than what to log.
    #[instrument(level = "info", skip_all, fields(relay = %self.relay_host, recipients = self.recipients.len()))]
    pub async fn deliver(&self, subject: &str, html_body: String) -> Outcome<()> {
        let message = match self.compose(subject, html_body) {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, "Failed to compose digest message");
                return Outcome::Degraded(Degradation::send(e));
            }
        };

        let transport = match AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.relay_host)
        {
            Ok(builder) => builder
                .port(self.relay_port)
                .credentials(self.credentials.clone())
                .build(),
            Err(e) => {
                warn!(error = %e, "Failed to set up relay session");
                return Outcome::Degraded(Degradation::send(e));
            }
        };

        match transport.send(message).await {
            Ok(response) => {
                info!(code = %response.code(), "Relay accepted the digest");
                Outcome::Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Digest submission failed; no mail delivered this run");
                Outcome::Degraded(Degradation::send(e))
            }
        }
    }
}
