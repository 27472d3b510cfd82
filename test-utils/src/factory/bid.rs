//! Bid factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct BidFactory<'a> {
    db: &'a DatabaseConnection,
    item_id: i32,
    user_id: i32,
    amount: i64,
    anonymous: bool,
}

impl<'a> BidFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, item_id: i32, user_id: i32, amount: i64) -> Self {
        Self {
            db,
            item_id,
            user_id,
            amount,
            anonymous: false,
        }
    }

    pub fn anonymous(mut self, anonymous: bool) -> Self {
        self.anonymous = anonymous;
        self
    }

    pub async fn build(self) -> Result<entity::bid::Model, DbErr> {
        entity::bid::ActiveModel {
            id: ActiveValue::NotSet,
            item_id: ActiveValue::Set(self.item_id),
            user_id: ActiveValue::Set(self.user_id),
            amount: ActiveValue::Set(self.amount),
            anonymous: ActiveValue::Set(self.anonymous),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a public bid.
pub async fn create_bid(
    db: &DatabaseConnection,
    item_id: i32,
    user_id: i32,
    amount: i64,
) -> Result<entity::bid::Model, DbErr> {
    BidFactory::new(db, item_id, user_id, amount).build().await
}
