//! Email notification service using lettre

use std::sync::Arc;

use async_trait::async_trait;
use lettre::{
    Message,
    message::{Mailbox, header::ContentType},
};

use crate::{
    DeliveryError, DeliveryResult, MailConfig,
    relay::{self, Relay, SmtpRelay},
};

/// Subject and plain-text body of an owner notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    pub subject: String,
    pub body: String,
}

/// Best-effort delivery of a notification to the site owner.
///
/// Implementations report failures through [`DeliveryResult`] and never
/// retry.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &NotificationMessage) -> DeliveryResult;
}

/// Sends notifications over SMTP, one connection per message
#[derive(Clone)]
pub struct SmtpNotifier<R = SmtpRelay> {
    config: Arc<MailConfig>,
    relay: Arc<R>,
}

impl SmtpNotifier {
    pub fn new(config: MailConfig) -> Self {
        tracing::info!(
            smtp_host = %config.host,
            smtp_port = config.port,
            use_tls = config.use_tls,
            authenticated = config.credentials().is_some(),
            recipient = %config.recipient,
            "Email notifier initialized"
        );

        Self::with_relay(config, SmtpRelay)
    }
}

impl<R: Relay> SmtpNotifier<R> {
    pub fn with_relay(config: MailConfig, relay: R) -> Self {
        Self {
            config: Arc::new(config),
            relay: Arc::new(relay),
        }
    }

    fn build(&self, message: &NotificationMessage) -> Result<Message, DeliveryError> {
        Ok(Message::builder()
            .from(parse_mailbox(self.config.sender_address())?)
            .to(parse_mailbox(&self.config.recipient)?)
            .subject(message.subject.to_owned())
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.to_owned())?)
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, DeliveryError> {
    address.parse().map_err(|source| DeliveryError::Address {
        address: address.to_owned(),
        source,
    })
}

#[async_trait]
impl<R> Notifier for SmtpNotifier<R>
where
    R: Relay + Send + Sync + 'static,
{
    #[tracing::instrument(skip_all, fields(subject = %message.subject))]
    async fn send(&self, message: &NotificationMessage) -> DeliveryResult {
        let result = match self.build(message) {
            Ok(email) => {
                let config = self.config.clone();
                let relay = self.relay.clone();

                tokio::task::spawn_blocking(move || relay::deliver(&*relay, &config, &email))
                    .await
                    .unwrap_or_else(|e| Err(DeliveryError::from(e)))
            }
            Err(err) => Err(err),
        };

        match &result {
            Ok(()) => tracing::info!(recipient = %self.config.recipient, "Notification sent"),
            Err(err) => tracing::error!(
                error = %err,
                smtp_host = %self.config.host,
                smtp_port = self.config.port,
                "Failed to send notification"
            ),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::fake::{FakeRelay, Step};

    fn config() -> MailConfig {
        MailConfig {
            host: "smtp.weba.test".to_string(),
            username: "office@weba.test".to_string(),
            password: "secret".to_string(),
            recipient: "owner@weba.test".to_string(),
            ..Default::default()
        }
    }

    fn message() -> NotificationMessage {
        NotificationMessage {
            subject: "New contact form submission from Jane".to_string(),
            body: "\nNew contact form submission:\n\nName: Jane\n\nMessage:\nHi\n".to_string(),
        }
    }

    #[tokio::test]
    async fn sends_plain_text_from_sender_to_recipient() {
        let relay = FakeRelay::default();
        let notifier = SmtpNotifier::with_relay(config(), relay.clone());

        notifier.send(&message()).await.unwrap();

        let sent = relay.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("From: office@weba.test"));
        assert!(sent[0].contains("To: owner@weba.test"));
        assert!(sent[0].contains("Subject: New contact form submission from Jane"));
        assert!(sent[0].contains("Content-Type: text/plain"));
        assert!(sent[0].contains("Name: Jane"));
    }

    #[tokio::test]
    async fn auth_rejection_is_reported_not_raised() {
        let relay = FakeRelay::failing_on(Step::Authenticate);
        let notifier = SmtpNotifier::with_relay(config(), relay.clone());

        let result = notifier.send(&message()).await;

        assert!(matches!(result, Err(DeliveryError::Auth(_))));
        assert_eq!(relay.closes(), 1);
    }

    #[tokio::test]
    async fn invalid_recipient_never_connects() {
        let relay = FakeRelay::default();
        let notifier = SmtpNotifier::with_relay(
            MailConfig {
                recipient: String::new(),
                ..config()
            },
            relay.clone(),
        );

        let result = notifier.send(&message()).await;

        assert!(matches!(result, Err(DeliveryError::Address { .. })));
        assert!(relay.log().is_empty());
    }

    #[tokio::test]
    async fn unreachable_relay_fails_to_connect() {
        let notifier = SmtpNotifier::new(MailConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            timeout_secs: 2,
            ..config()
        });

        let result = notifier.send(&message()).await;

        assert!(matches!(result, Err(DeliveryError::Connect { port: 1, .. })));
    }
}
