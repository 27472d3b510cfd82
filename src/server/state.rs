//! Application state shared across all request handlers.
//!
//! `AppState` holds the shared resources every handler needs. It is built once
//! during startup and cloned for each request through Axum's state extraction.
//! All fields are cheap to clone: the database connection is a pool handle,
//! `reqwest::Client` and the broadcaster are `Arc`-backed, and the OAuth client
//! is designed to be cloned.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use super::events::broadcaster::EventBroadcaster;
use super::service::mailer::Mailer;

/// Type alias for the OAuth2 client configured for the identity provider.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for external API requests. Configured with redirects
    /// disabled to prevent SSRF through provider-supplied URLs.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the login flow.
    pub oauth_client: OAuth2Client,

    /// Userinfo endpoint of the identity provider.
    pub oauth_userinfo_url: String,

    /// Broadcast fan-out feeding the per-auction SSE streams.
    pub broadcaster: EventBroadcaster,

    /// Transactional mail client.
    pub mailer: Mailer,

    /// Application base URL for generating links in emails and redirects.
    pub app_url: String,

    /// Emails granted the platform-admin flag on login (lowercase).
    pub admin_emails: Vec<String>,
}

impl AppState {
    /// Creates the application state; called once during startup after all
    /// dependencies have been initialized.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        oauth_userinfo_url: String,
        broadcaster: EventBroadcaster,
        mailer: Mailer,
        app_url: String,
        admin_emails: Vec<String>,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            oauth_userinfo_url,
            broadcaster,
            mailer,
            app_url,
            admin_emails,
        }
    }
}
