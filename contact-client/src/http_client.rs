use crate::error::ContactClientError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

pub const DEFAULT_TOKEN_FILE: &str = ".contact_token";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    message: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

#[derive(Debug, Serialize)]
struct ContactPayload<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    number: Option<i64>,
}

#[derive(Clone)]
pub struct ContactClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    token_file: PathBuf,
}

impl ContactClient {
    pub fn connect(endpoint: &str) -> Result<Self, ContactClientError> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: endpoint.trim_end_matches('/').to_string(),
            token: None,
            token_file: PathBuf::from(DEFAULT_TOKEN_FILE),
        })
    }

    /// Where `login` persists the token so later runs can reuse it.
    pub fn with_token_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_file = path.into();
        self
    }

    pub fn set_token(&mut self, token: String) -> Result<(), ContactClientError> {
        fs::write(&self.token_file, &token)?;
        self.token = Some(token);
        Ok(())
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn stored_token(&self) -> Result<String, ContactClientError> {
        if let Some(token) = self.token.as_deref().filter(|t| !t.is_empty()) {
            return Ok(token.to_string());
        }
        let token = fs::read_to_string(&self.token_file)
            .map_err(|_| ContactClientError::MissingToken)?
            .trim()
            .to_string();
        if token.is_empty() {
            Err(ContactClientError::MissingToken)
        } else {
            Ok(token)
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<String, ContactClientError> {
        let resp = self
            .client
            .post(self.url("/signup"))
            .json(&serde_json::json!({
                "name": name,
                "email": email,
                "password": password,
            }))
            .send()
            .await?;

        if resp.status().is_success() {
            let body: MessageResponse = resp.json().await?;
            Ok(body.message)
        } else {
            Err(ContactClientError::from_http_response(resp).await)
        }
    }

    /// Logs in and keeps the issued token for `profile`.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), ContactClientError> {
        let resp = self
            .client
            .post(self.url("/login"))
            .json(&serde_json::json!({
                "email": email,
                "password": password,
            }))
            .send()
            .await?;

        if resp.status().is_success() {
            let body: TokenResponse = resp.json().await?;
            debug!("login succeeded, storing token");
            self.set_token(body.token)
        } else {
            Err(ContactClientError::from_http_response(resp).await)
        }
    }

    pub async fn profile(&self) -> Result<Profile, ContactClientError> {
        // The server expects the raw token, no scheme.
        let resp = self
            .client
            .get(self.url("/user"))
            .header(reqwest::header::AUTHORIZATION, self.stored_token()?)
            .send()
            .await?;

        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            Err(ContactClientError::from_http_response(resp).await)
        }
    }

    pub async fn contact(
        &self,
        name: &str,
        email: &str,
        message: &str,
        number: Option<i64>,
    ) -> Result<String, ContactClientError> {
        let resp = self
            .client
            .post(self.url("/contact"))
            .json(&ContactPayload {
                name,
                email,
                message,
                number,
            })
            .send()
            .await?;

        if resp.status().is_success() {
            let body: MessageResponse = resp.json().await?;
            Ok(body.message)
        } else {
            Err(ContactClientError::from_http_response(resp).await)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = ContactClient::connect("http://localhost:5000/").unwrap();

        assert_eq!(client.url("/login"), "http://localhost:5000/api/login");
    }

    #[test]
    fn token_survives_in_the_token_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");

        let mut client = ContactClient::connect("http://localhost:5000")
            .unwrap()
            .with_token_file(&path);
        client.set_token("abc.def.ghi".into()).unwrap();

        let fresh = ContactClient::connect("http://localhost:5000")
            .unwrap()
            .with_token_file(&path);
        assert_eq!(fresh.token(), None);
        assert_eq!(fresh.stored_token().unwrap(), "abc.def.ghi");
    }

    #[test]
    fn missing_token_file_means_not_logged_in() {
        let dir = tempfile::tempdir().unwrap();
        let client = ContactClient::connect("http://localhost:5000")
            .unwrap()
            .with_token_file(dir.path().join("absent"));

        assert!(matches!(
            client.stored_token(),
            Err(ContactClientError::MissingToken)
        ));
    }

    #[test]
    fn contact_payload_omits_absent_number() {
        let payload = ContactPayload {
            name: "Bob",
            email: "b@x.com",
            message: "hi",
            number: None,
        };
        let value = serde_json::to_value(&payload).unwrap();

        assert!(value.get("number").is_none());
        assert_eq!(value["message"], "hi");
    }
}
