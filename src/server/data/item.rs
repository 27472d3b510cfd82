use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    bid::ApplyBidParams,
    item::{CreateItemParams, ItemWithVisibility, UpdateItemParams},
};

pub struct ItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateItemParams,
    ) -> Result<entity::auction_item::Model, DbErr> {
        entity::auction_item::ActiveModel {
            id: ActiveValue::NotSet,
            auction_id: ActiveValue::Set(params.auction_id),
            creator_id: ActiveValue::Set(params.creator_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            image_url: ActiveValue::Set(params.image_url),
            currency: ActiveValue::Set(params.currency),
            starting_bid: ActiveValue::Set(params.starting_bid),
            min_increment: ActiveValue::Set(params.min_increment),
            ends_at: ActiveValue::Set(params.ends_at),
            anti_snipe_window: ActiveValue::Set(params.anti_snipe_window),
            current_bid: ActiveValue::Set(None),
            current_bidder_id: ActiveValue::Set(None),
            bid_count: ActiveValue::Set(0),
            closed_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::auction_item::Model>, DbErr> {
        entity::prelude::AuctionItem::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets an item together with the anonymity of its highest bid.
    pub async fn get_with_visibility(
        &self,
        id: i32,
    ) -> Result<Option<ItemWithVisibility>, DbErr> {
        let Some(item) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let highest_anonymous = self.highest_bid_anonymous(&item).await?;

        Ok(Some(ItemWithVisibility {
            item,
            highest_anonymous,
        }))
    }

    /// Gets paginated items of an auction, newest first.
    pub async fn get_by_auction_paginated(
        &self,
        auction_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<ItemWithVisibility>, u64), DbErr> {
        let paginator = entity::prelude::AuctionItem::find()
            .filter(entity::auction_item::Column::AuctionId.eq(auction_id))
            .order_by_desc(entity::auction_item::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(page).await?;

        let mut results = Vec::new();
        for item in items {
            let highest_anonymous = self.highest_bid_anonymous(&item).await?;
            results.push(ItemWithVisibility {
                item,
                highest_anonymous,
            });
        }

        Ok((results, total))
    }

    /// Updates item details. The service layer enforces which fields may
    /// still change once bids exist.
    pub async fn update(
        &self,
        params: UpdateItemParams,
    ) -> Result<Option<entity::auction_item::Model>, DbErr> {
        let Some(item) = self.get_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut active: entity::auction_item::ActiveModel = item.into();
        active.name = ActiveValue::Set(params.name);
        active.description = ActiveValue::Set(params.description);
        active.image_url = ActiveValue::Set(params.image_url);
        active.currency = ActiveValue::Set(params.currency);
        active.starting_bid = ActiveValue::Set(params.starting_bid);
        active.min_increment = ActiveValue::Set(params.min_increment);
        active.ends_at = ActiveValue::Set(params.ends_at);
        active.anti_snipe_window = ActiveValue::Set(params.anti_snipe_window);

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::AuctionItem::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Applies the highest-bid transition as a single conditional UPDATE.
    ///
    /// The filter re-checks the expected current bid and that the item is
    /// still open, so a concurrent bid or close makes this a no-op. Returns
    /// the number of affected rows: 1 means the transition applied, 0 means
    /// the optimistic check failed.
    pub async fn apply_bid(&self, params: ApplyBidParams) -> Result<u64, DbErr> {
        let mut update = entity::prelude::AuctionItem::update_many()
            .col_expr(
                entity::auction_item::Column::CurrentBid,
                Expr::value(params.amount),
            )
            .col_expr(
                entity::auction_item::Column::CurrentBidderId,
                Expr::value(params.bidder_id),
            )
            .col_expr(
                entity::auction_item::Column::BidCount,
                Expr::col(entity::auction_item::Column::BidCount).add(1),
            )
            .filter(entity::auction_item::Column::Id.eq(params.item_id))
            .filter(entity::auction_item::Column::ClosedAt.is_null());

        update = match params.expected_current_bid {
            Some(expected) => {
                update.filter(entity::auction_item::Column::CurrentBid.eq(expected))
            }
            None => update.filter(entity::auction_item::Column::CurrentBid.is_null()),
        };

        if let Some(new_ends_at) = params.new_ends_at {
            update = update.col_expr(
                entity::auction_item::Column::EndsAt,
                Expr::value(new_ends_at),
            );
        }

        let result = update.exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Finds open items whose deadline has passed.
    pub async fn find_due(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<entity::auction_item::Model>, DbErr> {
        entity::prelude::AuctionItem::find()
            .filter(entity::auction_item::Column::ClosedAt.is_null())
            .filter(entity::auction_item::Column::EndsAt.lte(now))
            .all(self.db)
            .await
    }

    /// Marks an item closed. The `closed_at IS NULL` guard makes closing
    /// idempotent under concurrent scheduler runs; returns affected rows.
    pub async fn close(&self, id: i32, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::AuctionItem::update_many()
            .col_expr(entity::auction_item::Column::ClosedAt, Expr::value(now))
            .filter(entity::auction_item::Column::Id.eq(id))
            .filter(entity::auction_item::Column::ClosedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Whether the item's highest bid was placed anonymously.
    async fn highest_bid_anonymous(
        &self,
        item: &entity::auction_item::Model,
    ) -> Result<bool, DbErr> {
        if item.current_bidder_id.is_none() {
            return Ok(false);
        }

        let latest = entity::prelude::Bid::find()
            .filter(entity::bid::Column::ItemId.eq(item.id))
            .order_by_desc(entity::bid::Column::Id)
            .one(self.db)
            .await?;

        Ok(latest.map(|b| b.anonymous).unwrap_or(false))
    }
}
