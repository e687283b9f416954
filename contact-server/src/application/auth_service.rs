use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use crate::data::user_repository::UserRepository;
use crate::domain::{error::DomainError, user::User};
use crate::infrastructure::security::{JwtKeys, hash_password, verify_password};

pub struct AuthService<R: UserRepository + 'static> {
    repo: Arc<R>,
    keys: JwtKeys,
}

impl<R: UserRepository + 'static> Clone for AuthService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            keys: self.keys.clone(),
        }
    }
}

impl<R> AuthService<R>
where
    R: UserRepository + 'static,
{
    pub fn new(repo: Arc<R>, keys: JwtKeys) -> Self {
        Self { repo, keys }
    }

    pub fn keys(&self) -> &JwtKeys {
        &self.keys
    }

    pub async fn get_user(&self, id: Uuid) -> Result<User, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::UserNotFound)
    }

    #[instrument(skip(self, password))]
    pub async fn register(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> Result<User, DomainError> {
        let email = email.to_lowercase();
        if self.repo.find_by_email(&email).await?.is_some() {
            info!("signup rejected, email already registered");
            return Err(DomainError::EmailTaken(email));
        }

        let hash = off_worker(move || hash_password(&password)).await?;
        let user = User::new(name, email, hash);
        self.repo.create(user).await
    }

    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<String, DomainError> {
        let user = self
            .repo
            .find_by_email(&email.to_lowercase())
            .await?
            .ok_or(DomainError::UserNotFound)?;

        let password = password.to_owned();
        let hash = user.password_hash.clone();
        let valid = off_worker(move || verify_password(&password, &hash)).await?;
        if !valid {
            return Err(DomainError::InvalidCredentials);
        }

        self.keys
            .generate_token(user.id)
            .map_err(|err| DomainError::Internal(err.to_string()))
    }
}

/// Runs an Argon2 step on the blocking pool, off the HTTP worker thread.
async fn off_worker<T, F>(work: F) -> Result<T, DomainError>
where
    F: FnOnce() -> Result<T, argon2::password_hash::Error> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|err| DomainError::Internal(err.to_string()))?
        .map_err(|err| DomainError::Internal(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::memory::InMemoryUserRepository;

    fn service() -> AuthService<InMemoryUserRepository> {
        AuthService::new(
            Arc::new(InMemoryUserRepository::new()),
            JwtKeys::new("test-secret".into()),
        )
    }

    #[tokio::test]
    async fn register_stores_hash_not_plaintext() {
        let auth = service();
        let user = auth
            .register("Ann".into(), "Ann@X.com".into(), "secret1".into())
            .await
            .unwrap();

        assert_eq!(user.email, "ann@x.com");
        assert_ne!(user.password_hash, "secret1");
        assert!(verify_password("secret1", &user.password_hash).unwrap());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_whatever_the_other_fields() {
        let auth = service();
        auth.register("Ann".into(), "ann@x.com".into(), "secret1".into())
            .await
            .unwrap();

        let err = auth
            .register("Someone".into(), "ANN@x.com".into(), "different".into())
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::EmailTaken(_)));
    }

    #[tokio::test]
    async fn login_issues_token_for_the_registered_user() {
        let auth = service();
        let user = auth
            .register("Ann".into(), "ann@x.com".into(), "secret1".into())
            .await
            .unwrap();

        let token = auth.login("ann@x.com", "secret1").await.unwrap();

        assert_eq!(auth.keys().verify_token(&token).unwrap(), user.id);
        assert_eq!(auth.get_user(user.id).await.unwrap().name, "Ann");
    }

    #[tokio::test]
    async fn login_distinguishes_unknown_email_from_wrong_password() {
        let auth = service();
        auth.register("Ann".into(), "ann@x.com".into(), "secret1".into())
            .await
            .unwrap();

        assert!(matches!(
            auth.login("ann@x.com", "wrong").await,
            Err(DomainError::InvalidCredentials)
        ));
        assert!(matches!(
            auth.login("nobody@x.com", "secret1").await,
            Err(DomainError::UserNotFound)
        ));
    }

    #[tokio::test]
    async fn unknown_user_id_is_not_found() {
        assert!(matches!(
            service().get_user(Uuid::new_v4()).await,
            Err(DomainError::UserNotFound)
        ));
    }

    #[tokio::test]
    async fn corrupt_stored_hash_is_an_internal_error() {
        let repo = Arc::new(InMemoryUserRepository::new());
        repo.create(User::new(
            "Ann".into(),
            "ann@x.com".into(),
            "not-a-phc-string".into(),
        ))
        .await
        .unwrap();
        let auth = AuthService::new(repo, JwtKeys::new("test-secret".into()));

        assert!(matches!(
            auth.login("ann@x.com", "secret1").await,
            Err(DomainError::Internal(_))
        ));
    }
}
