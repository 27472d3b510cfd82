use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::member::MemberRole;

pub struct InviteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InviteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        auction_id: i32,
        email: String,
        role: MemberRole,
        token: String,
        invited_by: i32,
    ) -> Result<entity::auction_invite::Model, DbErr> {
        entity::auction_invite::ActiveModel {
            id: ActiveValue::NotSet,
            auction_id: ActiveValue::Set(auction_id),
            email: ActiveValue::Set(email),
            role: ActiveValue::Set(role.as_str().to_string()),
            token: ActiveValue::Set(token),
            invited_by: ActiveValue::Set(invited_by),
            created_at: ActiveValue::Set(Utc::now()),
            accepted_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<entity::auction_invite::Model>, DbErr> {
        entity::prelude::AuctionInvite::find()
            .filter(entity::auction_invite::Column::Token.eq(token))
            .one(self.db)
            .await
    }

    /// Lists invites that have not been accepted yet, newest first.
    pub async fn list_pending(
        &self,
        auction_id: i32,
    ) -> Result<Vec<entity::auction_invite::Model>, DbErr> {
        entity::prelude::AuctionInvite::find()
            .filter(entity::auction_invite::Column::AuctionId.eq(auction_id))
            .filter(entity::auction_invite::Column::AcceptedAt.is_null())
            .order_by_desc(entity::auction_invite::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Checks for an open invite to the same address.
    pub async fn pending_exists(&self, auction_id: i32, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::AuctionInvite::find()
            .filter(entity::auction_invite::Column::AuctionId.eq(auction_id))
            .filter(entity::auction_invite::Column::Email.eq(email))
            .filter(entity::auction_invite::Column::AcceptedAt.is_null())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn mark_accepted(
        &self,
        id: i32,
    ) -> Result<Option<entity::auction_invite::Model>, DbErr> {
        let Some(invite) = entity::prelude::AuctionInvite::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::auction_invite::ActiveModel = invite.into();
        active.accepted_at = ActiveValue::Set(Some(Utc::now()));

        Ok(Some(active.update(self.db).await?))
    }
}
