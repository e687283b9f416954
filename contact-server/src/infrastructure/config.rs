use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub jwt_secret: String,
    pub smtp: SmtpConfig,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub username: String,
    pub password: String,
    /// Operator address that receives contact notifications.
    pub recipient: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let required = |key: &str| var(key).ok_or_else(|| anyhow::anyhow!("{key} must be set"));

        let host = var("HOST").unwrap_or_else(|| "127.0.0.1".into());
        let port = var("PORT")
            .unwrap_or_else(|| "5000".into())
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid PORT: {}", e))?;
        let database_url = required("DATABASE_URL")?;
        let db_max_connections = var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|| "10".into())
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid DATABASE_MAX_CONNECTIONS: {}", e))?;
        let jwt_secret = required("JWT_SECRET")?;

        let username = required("EMAIL_USER")?;
        let smtp = SmtpConfig {
            host: var("SMTP_HOST").unwrap_or_else(|| "smtp.gmail.com".into()),
            password: required("EMAIL_PASS")?,
            recipient: var("CONTACT_RECIPIENT").unwrap_or_else(|| username.clone()),
            username,
        };

        let cors_origins = var("CORS_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            database_url,
            db_max_connections,
            jwt_secret,
            smtp,
            cors_origins,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    const REQUIRED: &[(&str, &str)] = &[
        ("DATABASE_URL", "postgres://localhost/contact"),
        ("JWT_SECRET", "s3cret"),
        ("EMAIL_USER", "ops@example.com"),
        ("EMAIL_PASS", "app-password"),
    ];

    #[test]
    fn applies_defaults() {
        let config = AppConfig::from_lookup(lookup(REQUIRED)).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert_eq!(config.db_max_connections, 10);
        assert_eq!(config.smtp.host, "smtp.gmail.com");
        assert_eq!(config.smtp.recipient, "ops@example.com");
        assert_eq!(config.cors_origins, vec!["*".to_string()]);
    }

    #[test]
    fn reads_overrides() {
        let mut pairs = REQUIRED.to_vec();
        pairs.extend_from_slice(&[
            ("PORT", "8081"),
            ("DATABASE_MAX_CONNECTIONS", "4"),
            ("SMTP_HOST", "smtp.example.com"),
            ("CONTACT_RECIPIENT", "inbox@example.com"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
        ]);
        let config = AppConfig::from_lookup(lookup(&pairs)).unwrap();

        assert_eq!(config.port, 8081);
        assert_eq!(config.db_max_connections, 4);
        assert_eq!(config.smtp.host, "smtp.example.com");
        assert_eq!(config.smtp.recipient, "inbox@example.com");
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn missing_secret_is_an_error() {
        let pairs: Vec<_> = REQUIRED
            .iter()
            .copied()
            .filter(|(k, _)| *k != "JWT_SECRET")
            .collect();
        let err = AppConfig::from_lookup(lookup(&pairs)).unwrap_err();

        assert!(err.to_string().contains("JWT_SECRET"));
    }

    #[test]
    fn rejects_bad_port() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("PORT", "http"));

        assert!(AppConfig::from_lookup(lookup(&pairs)).is_err());
    }
}
