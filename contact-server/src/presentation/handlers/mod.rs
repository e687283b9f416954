pub mod auth;
pub mod contact;
pub mod health;

use actix_web::{Scope, web};

use crate::data::contact_repository::ContactRepository;
use crate::data::user_repository::UserRepository;
use crate::domain::error::DomainError;
use crate::infrastructure::mailer::Notifier;
use crate::infrastructure::security::JwtKeys;
use crate::presentation::middleware::JwtAuthMiddleware;

/// All API routes. Expects `web::Data<AuthService<R>>` and
/// `web::Data<ContactService<C, N>>` to be registered on the app.
pub fn api_scope<R, C, N>(keys: JwtKeys) -> Scope
where
    R: UserRepository + 'static,
    C: ContactRepository + 'static,
    N: Notifier + 'static,
{
    web::scope("/api")
        .app_data(json_config())
        .route("/health", web::get().to(health::health))
        .route("/signup", web::post().to(auth::signup::<R>))
        .route("/login", web::post().to(auth::login::<R>))
        .service(
            web::resource("/user")
                .wrap(JwtAuthMiddleware::new(keys))
                .route(web::get().to(auth::profile::<R>)),
        )
        .route("/contact", web::post().to(contact::submit::<C, N>))
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| DomainError::InvalidPayload(err.to_string()).into())
}
