use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAIL_FROM: &str = "Gavel <no-reply@localhost>";

pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub app_url: String,

    pub oauth_client_id: String,
    pub oauth_client_secret: String,
    pub oauth_redirect_url: String,
    pub oauth_auth_url: String,
    pub oauth_token_url: String,
    pub oauth_userinfo_url: String,

    /// Transactional mail HTTP API; emails are skipped when unset.
    pub mail_api_url: Option<String>,
    pub mail_api_key: Option<String>,
    pub mail_from: String,

    /// Emails granted the platform-admin flag on login.
    pub admin_emails: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
            app_url: require("APP_URL")?,
            oauth_client_id: require("OAUTH_CLIENT_ID")?,
            oauth_client_secret: require("OAUTH_CLIENT_SECRET")?,
            oauth_redirect_url: require("OAUTH_REDIRECT_URL")?,
            oauth_auth_url: require("OAUTH_AUTH_URL")?,
            oauth_token_url: require("OAUTH_TOKEN_URL")?,
            oauth_userinfo_url: require("OAUTH_USERINFO_URL")?,
            mail_api_url: std::env::var("MAIL_API_URL").ok(),
            mail_api_key: std::env::var("MAIL_API_KEY").ok(),
            mail_from: std::env::var("MAIL_FROM").unwrap_or_else(|_| DEFAULT_MAIL_FROM.to_string()),
            admin_emails: std::env::var("ADMIN_EMAILS")
                .map(|v| {
                    v.split(',')
                        .map(|e| e.trim().to_ascii_lowercase())
                        .filter(|e| !e.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        })
    }
}

fn require(name: &str) -> Result<String, AppError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()).into())
}
