use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::AuthGuard,
            session::{AuthSession, CsrfSession},
        },
        model::user::user_into_dto,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Query parameters of the OAuth callback.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from the identity provider for token exchange.
    pub code: String,
}

/// Start the login flow.
///
/// Stores a CSRF token in the session and redirects to the identity
/// provider's consent screen.
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the identity provider"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.oauth_userinfo_url,
    );

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().to_string())
        .await?;

    Ok(Redirect::temporary(url.as_ref()))
}

/// OAuth callback.
///
/// Validates the CSRF state, exchanges the code, upserts the user and binds
/// the session, then redirects back to the application.
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state token"),
        ("code" = String, Query, description = "Authorization code")
    ),
    responses(
        (status = 307, description = "Redirect back to the application"),
        (status = 400, description = "CSRF validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    validate_csrf(&session, &params.state).await?;

    let auth_service = AuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.oauth_userinfo_url,
    );

    let user = auth_service
        .callback(params.code, &state.admin_emails)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok(Redirect::temporary(&state.app_url))
}

/// Log out and clear the session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session cleared"),
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the currently authenticated user.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The authenticated user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn current_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user_into_dto(user))))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored = CsrfSession::new(session).take_token().await?;

    if let Some(token) = stored {
        if token == csrf_state {
            return Ok(());
        }
    }

    Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
}
