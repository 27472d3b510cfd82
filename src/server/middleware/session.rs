//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but exposes only the
//! methods relevant to its concern, preventing key typos and centralizing
//! session logic:
//! - `AuthSession` - user authentication state (user id)
//! - `CsrfSession` - CSRF token management for the OAuth flow

use tower_sessions::Session;

use crate::server::error::AppError;

// Session key constants
const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's id in the session after successful authentication.
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the authenticated user's id, or `None` when not logged in.
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Clears all session data; used during logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// CSRF protection for the OAuth flow.
///
/// A token is stored when the login redirect is issued and validated (and
/// consumed) during the callback.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Removes and returns the CSRF token. Removal makes each token
    /// single-use, which blocks replayed callbacks.
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}
