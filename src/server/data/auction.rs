use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    auction::{AuctionWithMeta, CreateAuctionParams, UpdateAuctionParams},
    member::MemberRole,
};

pub struct AuctionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuctionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an auction and its owner membership row.
    pub async fn create(
        &self,
        owner_id: i32,
        params: CreateAuctionParams,
        link_token: String,
    ) -> Result<entity::auction::Model, DbErr> {
        let auction = entity::auction::ActiveModel {
            id: ActiveValue::NotSet,
            owner_id: ActiveValue::Set(owner_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            join_mode: ActiveValue::Set(params.join_mode.as_str().to_string()),
            link_token: ActiveValue::Set(link_token),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        entity::auction_member::ActiveModel {
            id: ActiveValue::NotSet,
            auction_id: ActiveValue::Set(auction.id),
            user_id: ActiveValue::Set(owner_id),
            role: ActiveValue::Set(MemberRole::Owner.as_str().to_string()),
            joined_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(auction)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::auction::Model>, DbErr> {
        entity::prelude::Auction::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_link_token(
        &self,
        token: &str,
    ) -> Result<Option<entity::auction::Model>, DbErr> {
        entity::prelude::Auction::find()
            .filter(entity::auction::Column::LinkToken.eq(token))
            .one(self.db)
            .await
    }

    /// Gets paginated auctions the user belongs to, newest first, together
    /// with the user's role and aggregate counts.
    pub async fn get_for_user_paginated(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<AuctionWithMeta>, u64), DbErr> {
        let paginator = entity::prelude::Auction::find()
            .find_also_related(entity::prelude::AuctionMember)
            .filter(entity::auction_member::Column::UserId.eq(user_id))
            .order_by_desc(entity::auction::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page).await?;

        let mut results = Vec::new();
        for (auction, member) in rows {
            let member = member.ok_or_else(|| {
                DbErr::Custom(format!(
                    "Membership row missing for auction {} user {}",
                    auction.id, user_id
                ))
            })?;
            let role = MemberRole::parse(&member.role)?;
            let (member_count, item_count) = self.counts(auction.id).await?;

            results.push(AuctionWithMeta {
                auction,
                role,
                member_count,
                item_count,
            });
        }

        Ok((results, total))
    }

    /// Counts members and items of an auction.
    pub async fn counts(&self, auction_id: i32) -> Result<(u64, u64), DbErr> {
        let member_count = entity::prelude::AuctionMember::find()
            .filter(entity::auction_member::Column::AuctionId.eq(auction_id))
            .count(self.db)
            .await?;

        let item_count = entity::prelude::AuctionItem::find()
            .filter(entity::auction_item::Column::AuctionId.eq(auction_id))
            .count(self.db)
            .await?;

        Ok((member_count, item_count))
    }

    /// Updates name, description and join mode.
    pub async fn update(
        &self,
        params: UpdateAuctionParams,
    ) -> Result<Option<entity::auction::Model>, DbErr> {
        let Some(auction) = entity::prelude::Auction::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::auction::ActiveModel = auction.into();
        active.name = ActiveValue::Set(params.name);
        active.description = ActiveValue::Set(params.description);
        active.join_mode = ActiveValue::Set(params.join_mode.as_str().to_string());

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes an auction; members, invites, items and bids cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Auction::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
