//! Authorization guards executed at the top of each handler.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{member::MemberRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::member::MemberRole,
};

pub enum Permission {
    /// Platform-wide admin flag on the user record.
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the authenticated user and checks platform-level permissions.
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "Platform admin permission required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Resolves the authenticated user and requires an auction role of at
    /// least `minimum`. Returns the user together with their actual role.
    pub async fn require_member(
        &self,
        auction_id: i32,
        minimum: MemberRole,
    ) -> Result<(entity::user::Model, MemberRole), AppError> {
        let user = self.require(&[]).await?;

        let member_repo = MemberRepository::new(self.db);
        let Some(member) = member_repo.find(auction_id, user.id).await? else {
            return Err(AuthError::NotAMember(user.id, auction_id).into());
        };

        let role = MemberRole::parse(&member.role)?;
        if role < minimum {
            return Err(AuthError::InsufficientRole(user.id, auction_id).into());
        }

        Ok((user, role))
    }
}
