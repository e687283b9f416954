use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
    #[error("email already registered: {0}")]
    EmailTaken(String),
    #[error("user not found")]
    UserNotFound,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("missing authorization header")]
    MissingToken,
    #[error("invalid token")]
    InvalidToken,
    #[error("database error: {0}")]
    Database(String),
    #[error("mail delivery failed: {0}")]
    Delivery(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Text shown to API callers. Dependency failures never leak their cause.
    pub fn public_message(&self) -> String {
        match self {
            DomainError::MissingFields(_) => "All fields are required".to_string(),
            DomainError::InvalidPayload(reason) => reason.clone(),
            DomainError::EmailTaken(_) => "Email already exists".to_string(),
            DomainError::UserNotFound => "User not found".to_string(),
            DomainError::InvalidCredentials => "Invalid credentials".to_string(),
            DomainError::MissingToken => "Access Denied".to_string(),
            DomainError::InvalidToken => "Invalid Token".to_string(),
            DomainError::Database(_) | DomainError::Internal(_) => "Server error".to_string(),
            DomainError::Delivery(_) => "Error sending message".to_string(),
        }
    }
}

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::Database(err.to_string())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        match self {
            DomainError::MissingFields(_)
            | DomainError::InvalidPayload(_)
            | DomainError::EmailTaken(_)
            | DomainError::UserNotFound
            | DomainError::InvalidCredentials
            | DomainError::InvalidToken => StatusCode::BAD_REQUEST,
            DomainError::MissingToken => StatusCode::UNAUTHORIZED,
            DomainError::Database(_) | DomainError::Delivery(_) | DomainError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let details = match self {
            DomainError::MissingFields(fields) => Some(json!({ "missing": fields })),
            _ => None,
        };
        let body = ErrorBody {
            message: self.public_message(),
            details,
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
