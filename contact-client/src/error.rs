use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContactClientError {
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Not logged in")]
    MissingToken,
    #[error("Token storage error: {0}")]
    TokenStorage(#[from] std::io::Error),
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl ContactClientError {
    /// Turns a non-success response into an error, keeping the server's
    /// `message` when the body has one.
    pub async fn from_http_response(resp: reqwest::Response) -> Self {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.message)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("unexpected response")
                    .to_string()
            });

        if status == reqwest::StatusCode::UNAUTHORIZED {
            ContactClientError::Unauthorized(message)
        } else {
            ContactClientError::Api {
                status: status.as_u16(),
                message,
            }
        }
    }
}
