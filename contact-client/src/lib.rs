//! Async client for the contact backend's JSON API.

mod error;
mod http_client;

pub use error::ContactClientError;
pub use http_client::{ContactClient, DEFAULT_TOKEN_FILE, Profile};
