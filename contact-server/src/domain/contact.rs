use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A submitted contact form. Stored once and never read back by the API.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub number: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    pub fn new(name: String, email: String, message: String, number: Option<i64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            message,
            number,
            created_at: Utc::now(),
        }
    }
}
