//! Contact form mail relay
//!
//! The mailer is constructed from explicit configuration; there is no
//! process-wide mail singleton. Failures are logged and reported as a
//! boolean so the contact form can show a friendly notice instead of an
//! error page.

use anyhow::Result;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, Message, SmtpTransport, Transport};

use crate::config::MailConfig;

/// Relays contact form submissions over SMTP
#[derive(Clone)]
pub struct ContactMailer {
    config: MailConfig,
}

impl ContactMailer {
    /// Create a mailer from configuration
    pub fn new(config: MailConfig) -> Self {
        Self { config }
    }

    /// Send a contact message. Returns whether the message was delivered
    /// to the SMTP relay; any failure is logged here.
    ///
    /// The SMTP transport is blocking, so the relay runs on the blocking
    /// thread pool and never stalls a runtime worker.
    ///
    /// With mail disabled the submission is logged and treated as sent,
    /// which keeps the form usable in local development.
    pub async fn send(&self, name: &str, email: &str, subject: &str, message: &str) -> bool {
        if !self.config.enable {
            tracing::info!(
                "Mail disabled; contact submission from {} <{}>: {}",
                name,
                email,
                subject
            );
            return true;
        }

        let mailer = self.clone();
        let (name, email) = (name.to_string(), email.to_string());
        let (subject, message) = (subject.to_string(), message.to_string());

        let result = tokio::task::spawn_blocking(move || {
            let outcome = mailer.relay(&name, &email, &subject, &message);
            (name, email, outcome)
        })
        .await;

        match result {
            Ok((name, email, Ok(()))) => {
                tracing::info!("Contact mail relayed for {} <{}>", name, email);
                true
            }
            Ok((_, _, Err(e))) => {
                tracing::error!("Failed to send contact mail: {:#}", e);
                false
            }
            Err(e) => {
                tracing::error!("Contact mail task failed: {}", e);
                false
            }
        }
    }

    fn relay(&self, name: &str, email: &str, subject: &str, message: &str) -> Result<()> {
        let reply_to = Mailbox::new(Some(name.to_string()), email.parse::<Address>()?);

        let body = format!(
            "New contact form submission from your portfolio website:\n\n\
             Name: {name}\n\
             Email: {email}\n\
             Subject: {subject}\n\n\
             Message:\n{message}\n"
        );

        let mail = Message::builder()
            .from(self.config.from.parse()?)
            .reply_to(reply_to)
            .to(self.config.recipient.parse()?)
            .subject(format!("Portfolio Contact: {}", subject))
            .body(body)?;

        let mut builder =
            SmtpTransport::relay(&self.config.smtp_host)?.port(self.config.smtp_port);
        if !self.config.username.is_empty() {
            builder = builder.credentials(Credentials::new(
                self.config.username.clone(),
                self.config.password.clone(),
            ));
        }

        builder.build().send(&mail)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_mailer_accepts_submission() {
        let mailer = ContactMailer::new(MailConfig::default());
        assert!(mailer.send("Jane", "jane@example.com", "Hi", "Hello there").await);
    }

    #[tokio::test]
    async fn test_invalid_reply_address_fails() {
        let config = MailConfig {
            enable: true,
            recipient: "owner@example.com".to_string(),
            from: "site@example.com".to_string(),
            ..Default::default()
        };
        let mailer = ContactMailer::new(config);
        assert!(!mailer.send("Jane", "not-an-address", "Hi", "Hello").await);
    }
}
