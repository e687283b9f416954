use crate::domain::error::DomainError;
use crate::domain::user::User;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Every field is optional on the wire so a missing one surfaces as
// `MissingFields` instead of a serde error.

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub number: Option<i64>,
}

#[derive(Debug)]
pub struct Signup {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct Login {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub message: String,
    pub number: Option<i64>,
}

/// Collects the names of absent or empty fields.
struct Required {
    missing: Vec<&'static str>,
}

impl Required {
    fn new() -> Self {
        Self { missing: vec![] }
    }

    fn take(&mut self, field: &'static str, value: Option<String>) -> String {
        match value {
            Some(v) if !v.is_empty() => v,
            _ => {
                self.missing.push(field);
                String::new()
            }
        }
    }

    fn finish<T>(self, value: T) -> Result<T, DomainError> {
        if self.missing.is_empty() {
            Ok(value)
        } else {
            Err(DomainError::MissingFields(self.missing))
        }
    }
}

impl SignupRequest {
    pub fn validate(self) -> Result<Signup, DomainError> {
        let mut req = Required::new();
        let signup = Signup {
            name: req.take("name", self.name),
            email: req.take("email", self.email),
            password: req.take("password", self.password),
        };
        req.finish(signup)
    }
}

impl LoginRequest {
    pub fn validate(self) -> Result<Login, DomainError> {
        let mut req = Required::new();
        let login = Login {
            email: req.take("email", self.email),
            password: req.take("password", self.password),
        };
        req.finish(login)
    }
}

impl ContactRequest {
    pub fn validate(self) -> Result<Contact, DomainError> {
        let mut req = Required::new();
        let contact = Contact {
            name: req.take("name", self.name),
            email: req.take("email", self.email),
            message: req.take("message", self.message),
            number: self.number,
        };
        req.finish(contact)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Public view of a user. Has no password field at all.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}
