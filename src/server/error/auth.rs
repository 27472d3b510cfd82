use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id in the session; the caller is not logged in.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user id that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// CSRF state validation failed during the OAuth callback.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// The authorization code exchange with the provider failed.
    #[error("OAuth token exchange failed: {0}")]
    TokenExchange(String),

    /// The user is authenticated but lacks a required permission.
    #[error("User {0} denied: {1}")]
    AccessDenied(i32, String),

    /// The user is not a member of the auction they tried to access.
    #[error("User {0} is not a member of auction {1}")]
    NotAMember(i32, i32),

    /// The user's auction role is below the required role.
    #[error("User {0} lacks the required role in auction {1}")]
    InsufficientRole(i32, i32),
}

/// Maps authentication errors to HTTP responses.
///
/// Missing or stale sessions map to 401, permission failures to 403, and
/// OAuth flow failures to 400. Details are logged; client-facing messages
/// stay generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("auth error: {}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not logged in".to_string(),
                }),
            )
                .into_response(),
            Self::CsrfValidationFailed | Self::TokenExchange(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "There was an issue logging you in, please try again.".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) | Self::NotAMember(_, _) | Self::InsufficientRole(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You do not have access to this resource".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
