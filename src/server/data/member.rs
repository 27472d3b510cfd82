use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::member::{Member, MemberRole};

pub struct MemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find(
        &self,
        auction_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::auction_member::Model>, DbErr> {
        entity::prelude::AuctionMember::find()
            .filter(entity::auction_member::Column::AuctionId.eq(auction_id))
            .filter(entity::auction_member::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Adds a membership unless one already exists.
    ///
    /// Returns the membership row and whether it was newly inserted. An
    /// existing row is returned untouched, so re-joining never downgrades a
    /// role.
    pub async fn add_if_absent(
        &self,
        auction_id: i32,
        user_id: i32,
        role: MemberRole,
    ) -> Result<(entity::auction_member::Model, bool), DbErr> {
        if let Some(existing) = self.find(auction_id, user_id).await? {
            return Ok((existing, false));
        }

        let member = entity::auction_member::ActiveModel {
            id: ActiveValue::NotSet,
            auction_id: ActiveValue::Set(auction_id),
            user_id: ActiveValue::Set(user_id),
            role: ActiveValue::Set(role.as_str().to_string()),
            joined_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok((member, true))
    }

    /// Lists members with their user records, oldest first.
    pub async fn list_with_users(&self, auction_id: i32) -> Result<Vec<Member>, DbErr> {
        let rows = entity::prelude::AuctionMember::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::auction_member::Column::AuctionId.eq(auction_id))
            .order_by_asc(entity::auction_member::Column::JoinedAt)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(member, user)| Member { member, user })
            .collect())
    }

    pub async fn update_role(
        &self,
        auction_id: i32,
        user_id: i32,
        role: MemberRole,
    ) -> Result<Option<entity::auction_member::Model>, DbErr> {
        let Some(member) = self.find(auction_id, user_id).await? else {
            return Ok(None);
        };

        let mut active: entity::auction_member::ActiveModel = member.into();
        active.role = ActiveValue::Set(role.as_str().to_string());

        Ok(Some(active.update(self.db).await?))
    }

    /// Removes a membership. Returns false when no row existed.
    pub async fn remove(&self, auction_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::AuctionMember::delete_many()
            .filter(entity::auction_member::Column::AuctionId.eq(auction_id))
            .filter(entity::auction_member::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
