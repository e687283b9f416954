use actix_web::dev::Payload;
use actix_web::http::header::{AUTHORIZATION, HeaderMap};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{Ready, ready};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::presentation::middleware::RequestId;

/// Identity placed in request extensions by `JwtAuthMiddleware`.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: Uuid,
}

impl FromRequest for AuthenticatedUser {
    type Error = DomainError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(DomainError::MissingToken)),
        }
    }
}

/// The `Authorization` header carries the raw token. A `Bearer ` prefix is
/// accepted too.
pub fn token_from_headers(headers: &HeaderMap) -> Result<String, DomainError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(DomainError::MissingToken)?
        .to_str()
        .map_err(|_| DomainError::InvalidToken)?
        .trim();
    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();

    if token.is_empty() {
        Err(DomainError::MissingToken)
    } else {
        Ok(token.to_string())
    }
}

pub fn request_id(req: &HttpRequest) -> String {
    req.extensions()
        .get::<RequestId>()
        .map(|rid| rid.0.clone())
        .unwrap_or_else(|| "unknown".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::HeaderValue;

    fn headers(value: Option<&str>) -> HeaderMap {
        let mut map = HeaderMap::new();
        if let Some(value) = value {
            map.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn raw_and_bearer_tokens_are_accepted() {
        assert_eq!(token_from_headers(&headers(Some("abc.def.ghi"))).unwrap(), "abc.def.ghi");
        assert_eq!(
            token_from_headers(&headers(Some("Bearer abc.def.ghi"))).unwrap(),
            "abc.def.ghi"
        );
    }

    #[test]
    fn absent_or_blank_header_is_missing() {
        assert!(matches!(
            token_from_headers(&headers(None)),
            Err(DomainError::MissingToken)
        ));
        assert!(matches!(
            token_from_headers(&headers(Some("   "))),
            Err(DomainError::MissingToken)
        ));
    }
}
