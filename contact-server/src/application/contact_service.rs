use std::sync::Arc;

use tracing::{instrument, warn};

use crate::data::contact_repository::ContactRepository;
use crate::domain::{contact::ContactMessage, error::DomainError};
use crate::infrastructure::mailer::Notifier;

pub struct ContactService<C: ContactRepository + 'static, N: Notifier + 'static> {
    repo: Arc<C>,
    notifier: Arc<N>,
}

impl<C: ContactRepository + 'static, N: Notifier + 'static> Clone for ContactService<C, N> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            notifier: Arc::clone(&self.notifier),
        }
    }
}

impl<C, N> ContactService<C, N>
where
    C: ContactRepository + 'static,
    N: Notifier + 'static,
{
    pub fn new(repo: Arc<C>, notifier: Arc<N>) -> Self {
        Self { repo, notifier }
    }

    /// Stores the message, then sends exactly one notification for it.
    /// A delivery failure is reported but the stored message is kept.
    #[instrument(skip(self, message))]
    pub async fn submit(
        &self,
        name: String,
        email: String,
        message: String,
        number: Option<i64>,
    ) -> Result<ContactMessage, DomainError> {
        let contact = self
            .repo
            .create(ContactMessage::new(name, email, message, number))
            .await?;

        if let Err(err) = self.notifier.notify_contact(&contact).await {
            warn!(contact_id = %contact.id, "contact stored but notification failed");
            return Err(err);
        }

        Ok(contact)
    }
}
