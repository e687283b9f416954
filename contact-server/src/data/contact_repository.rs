use crate::domain::contact::ContactMessage;
use crate::domain::error::DomainError;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{error, info};

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, contact: ContactMessage) -> Result<ContactMessage, DomainError>;
}

#[derive(Clone)]
pub struct PostgresContactRepository {
    pool: PgPool,
}

impl PostgresContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn create(&self, contact: ContactMessage) -> Result<ContactMessage, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO contact_messages (id, name, email, message, number, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(contact.id)
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.message)
        .bind(contact.number)
        .bind(contact.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to store contact message: {}", e);
            DomainError::from(e)
        })?;

        info!(contact_id = %contact.id, email = %contact.email, "contact message stored");
        Ok(contact)
    }
}
