use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::bid::BidWithUser;

pub struct BidRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BidRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        item_id: i32,
        user_id: i32,
        amount: i64,
        anonymous: bool,
    ) -> Result<entity::bid::Model, DbErr> {
        entity::bid::ActiveModel {
            id: ActiveValue::NotSet,
            item_id: ActiveValue::Set(item_id),
            user_id: ActiveValue::Set(user_id),
            amount: ActiveValue::Set(amount),
            anonymous: ActiveValue::Set(anonymous),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Gets paginated bid history with bidder records, newest first.
    pub async fn get_by_item_paginated(
        &self,
        item_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<BidWithUser>, u64), DbErr> {
        let paginator = entity::prelude::Bid::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::bid::Column::ItemId.eq(item_id))
            .order_by_desc(entity::bid::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page).await?;

        let bids = rows
            .into_iter()
            .map(|(bid, user)| BidWithUser { bid, user })
            .collect();

        Ok((bids, total))
    }

    /// Number of bids recorded for an item.
    pub async fn count_by_item(&self, item_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Bid::find()
            .filter(entity::bid::Column::ItemId.eq(item_id))
            .count(self.db)
            .await
    }
}
