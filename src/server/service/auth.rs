//! OAuth2 login flow against a configurable identity provider.

use oauth2::{AuthorizationCode, CsrfToken, Scope, TokenResponse};
use sea_orm::DatabaseConnection;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::OAuthUserInfo,
    state::OAuth2Client,
};

/// Service for the OAuth2 authorization-code flow.
///
/// Generates the provider login URL, exchanges the callback code for a token,
/// fetches userinfo and upserts the local user record.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
    /// Userinfo endpoint of the identity provider.
    pub userinfo_url: &'a str,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        userinfo_url: &'a str,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            userinfo_url,
        }
    }

    /// Generates the provider authorization URL with a fresh CSRF token.
    ///
    /// The token is stored in the session and validated on callback.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .url();

        (authorize_url, csrf_state)
    }

    /// Handles the OAuth2 callback and authenticates the user.
    ///
    /// Exchanges the authorization code for an access token, fetches userinfo
    /// from the provider and upserts the local user. Users whose email appears
    /// in `admin_emails` get the platform-admin flag raised.
    pub async fn callback(
        &self,
        authorization_code: String,
        admin_emails: &[String],
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|err| AuthError::TokenExchange(err.to_string()))?;

        let info = self.fetch_userinfo(token.access_token().secret()).await?;

        let admin = admin_emails.contains(&info.email.to_lowercase());
        let user = user_repo.upsert(&info, admin).await?;

        if admin {
            tracing::info!("User {} logged in with platform-admin flag", user.email);
        }

        Ok(user)
    }

    async fn fetch_userinfo(&self, access_token: &str) -> Result<OAuthUserInfo, AppError> {
        let info = self
            .http_client
            .get(self.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<OAuthUserInfo>()
            .await?;

        Ok(info)
    }
}
