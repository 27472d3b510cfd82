use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Connects to the SQLite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is
/// up-to-date before the application touches the database.
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the same SQLite pool as the ORM.
///
/// Sessions expire after seven days of inactivity.
pub async fn session_layer(
    db: &sea_orm::DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let store = SqliteStore::new(pool.clone());
    store.migrate().await?;

    Ok(SessionManagerLayer::new(store)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Creates the HTTP client used for provider and mail API calls.
///
/// Redirects are disabled so a compromised provider URL cannot bounce
/// requests at internal services.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?)
}

/// Configures the OAuth2 client for the identity provider from config.
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let auth_url = AuthUrl::new(config.oauth_auth_url.clone())
        .map_err(|e| ConfigError::InvalidUrl("OAUTH_AUTH_URL".to_string(), e.to_string()))?;
    let token_url = TokenUrl::new(config.oauth_token_url.clone())
        .map_err(|e| ConfigError::InvalidUrl("OAUTH_TOKEN_URL".to_string(), e.to_string()))?;
    let redirect_url = RedirectUrl::new(config.oauth_redirect_url.clone())
        .map_err(|e| ConfigError::InvalidUrl("OAUTH_REDIRECT_URL".to_string(), e.to_string()))?;

    Ok(
        BasicClient::new(ClientId::new(config.oauth_client_id.clone()))
            .set_client_secret(ClientSecret::new(config.oauth_client_secret.clone()))
            .set_auth_uri(auth_url)
            .set_token_uri(token_url)
            .set_redirect_uri(redirect_url),
    )
}
