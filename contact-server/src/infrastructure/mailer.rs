use async_trait::async_trait;
use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{error, info};

use crate::domain::contact::ContactMessage;
use crate::domain::error::DomainError;
use crate::infrastructure::config::SmtpConfig;

pub const CONTACT_SUBJECT: &str = "New Contact Form Submission";

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify_contact(&self, contact: &ContactMessage) -> Result<(), DomainError>;
}

/// Sends contact notifications through an authenticated SMTP relay.
#[derive(Clone)]
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpNotifier {
    pub fn new(config: &SmtpConfig) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();
        let from = config
            .username
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid EMAIL_USER: {}", e))?;
        let to = config
            .recipient
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid CONTACT_RECIPIENT: {}", e))?;

        Ok(Self {
            transport,
            from,
            to,
        })
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn notify_contact(&self, contact: &ContactMessage) -> Result<(), DomainError> {
        let email = compose_contact_email(self.from.clone(), self.to.clone(), contact)
            .map_err(|e| DomainError::Delivery(e.to_string()))?;

        self.transport.send(email).await.map_err(|e| {
            error!(contact_id = %contact.id, "failed to send contact notification: {}", e);
            DomainError::Delivery(e.to_string())
        })?;

        info!(contact_id = %contact.id, "contact notification sent");
        Ok(())
    }
}

pub fn compose_contact_email(
    from: Mailbox,
    to: Mailbox,
    contact: &ContactMessage,
) -> Result<Message, lettre::error::Error> {
    Message::builder()
        .from(from)
        .to(to)
        .subject(CONTACT_SUBJECT)
        .header(ContentType::TEXT_PLAIN)
        .body(contact_email_text(contact))
}

pub fn contact_email_text(contact: &ContactMessage) -> String {
    let mut text = format!(
        "Name: {}\nEmail: {}\nMessage: {}",
        contact.name, contact.email, contact.message
    );
    if let Some(number) = contact.number {
        text.push_str(&format!("\nNumber: {}", number));
    }
    text
}
