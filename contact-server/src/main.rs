use std::sync::Arc;

use anyhow::Context;
use contact_server::application::auth_service::AuthService;
use contact_server::application::contact_service::ContactService;
use contact_server::data::contact_repository::PostgresContactRepository;
use contact_server::data::user_repository::PostgresUserRepository;
use contact_server::infrastructure::config::AppConfig;
use contact_server::infrastructure::database::{create_pool, run_migrations};
use contact_server::infrastructure::logging::init_logging;
use contact_server::infrastructure::mailer::SmtpNotifier;
use contact_server::infrastructure::security::JwtKeys;
use contact_server::server::start_rest_server;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = AppConfig::from_env().context("invalid configuration")?;
    let pool = create_pool(&config.database_url, config.db_max_connections)
        .await
        .context("failed to connect to database")?;
    run_migrations(&pool)
        .await
        .context("failed to run migrations")?;

    let user_repo = Arc::new(PostgresUserRepository::new(pool.clone()));
    let contact_repo = Arc::new(PostgresContactRepository::new(pool.clone()));
    let notifier = Arc::new(SmtpNotifier::new(&config.smtp).context("invalid SMTP settings")?);

    let auth_service = AuthService::new(user_repo, JwtKeys::new(config.jwt_secret.clone()));
    let contact_service = ContactService::new(contact_repo, notifier);

    start_rest_server(config, auth_service, contact_service).await
}
