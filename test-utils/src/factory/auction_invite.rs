//! Invite factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct InviteFactory<'a> {
    db: &'a DatabaseConnection,
    auction_id: i32,
    invited_by: i32,
    email: String,
    role: String,
    token: String,
    accepted_at: Option<DateTime<Utc>>,
}

impl<'a> InviteFactory<'a> {
    /// Creates a new InviteFactory with default values.
    ///
    /// Defaults:
    /// - email: `"invitee{id}@example.com"`
    /// - role: `"bidder"`
    /// - token: `"invite-token-{id}"`
    /// - accepted_at: `None`
    pub fn new(db: &'a DatabaseConnection, auction_id: i32, invited_by: i32) -> Self {
        let id = next_id();
        Self {
            db,
            auction_id,
            invited_by,
            email: format!("invitee{}@example.com", id),
            role: "bidder".to_string(),
            token: format!("invite-token-{}", id),
            accepted_at: None,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn accepted(mut self) -> Self {
        self.accepted_at = Some(Utc::now());
        self
    }

    pub async fn build(self) -> Result<entity::auction_invite::Model, DbErr> {
        entity::auction_invite::ActiveModel {
            id: ActiveValue::NotSet,
            auction_id: ActiveValue::Set(self.auction_id),
            email: ActiveValue::Set(self.email),
            role: ActiveValue::Set(self.role),
            token: ActiveValue::Set(self.token),
            invited_by: ActiveValue::Set(self.invited_by),
            created_at: ActiveValue::Set(Utc::now()),
            accepted_at: ActiveValue::Set(self.accepted_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending bidder invite with default values.
pub async fn create_invite(
    db: &DatabaseConnection,
    auction_id: i32,
    invited_by: i32,
) -> Result<entity::auction_invite::Model, DbErr> {
    InviteFactory::new(db, auction_id, invited_by).build().await
}
