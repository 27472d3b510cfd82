//! Item factory for creating test auction items.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test items with customizable fields.
///
/// Bid state fields (`current_bid`, `current_bidder_id`, `bid_count`) and
/// `closed_at` can be set directly to stage mid-auction scenarios without
/// replaying bids.
///
/// # Example
///
/// ```rust,ignore
/// let item = ItemFactory::new(&db, auction.id, owner.id)
///     .starting_bid(5_000)
///     .ends_at(Utc::now() + chrono::Duration::minutes(5))
///     .anti_snipe_window(120)
///     .build()
///     .await?;
/// ```
pub struct ItemFactory<'a> {
    db: &'a DatabaseConnection,
    auction_id: i32,
    creator_id: i32,
    name: String,
    currency: String,
    starting_bid: i64,
    min_increment: i64,
    ends_at: Option<DateTime<Utc>>,
    anti_snipe_window: Option<i32>,
    current_bid: Option<i64>,
    current_bidder_id: Option<i32>,
    bid_count: i32,
    closed_at: Option<DateTime<Utc>>,
}

impl<'a> ItemFactory<'a> {
    /// Creates a new ItemFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Item {id}"`
    /// - currency: `"USD"`
    /// - starting_bid: `1_000` (minor units)
    /// - min_increment: `100`
    /// - no deadline, no anti-snipe window, no bids, open
    pub fn new(db: &'a DatabaseConnection, auction_id: i32, creator_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            auction_id,
            creator_id,
            name: format!("Item {}", id),
            currency: "USD".to_string(),
            starting_bid: 1_000,
            min_increment: 100,
            ends_at: None,
            anti_snipe_window: None,
            current_bid: None,
            current_bidder_id: None,
            bid_count: 0,
            closed_at: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn starting_bid(mut self, starting_bid: i64) -> Self {
        self.starting_bid = starting_bid;
        self
    }

    pub fn min_increment(mut self, min_increment: i64) -> Self {
        self.min_increment = min_increment;
        self
    }

    pub fn ends_at(mut self, ends_at: DateTime<Utc>) -> Self {
        self.ends_at = Some(ends_at);
        self
    }

    pub fn anti_snipe_window(mut self, seconds: i32) -> Self {
        self.anti_snipe_window = Some(seconds);
        self
    }

    /// Stages an existing highest bid.
    pub fn with_current_bid(mut self, amount: i64, bidder_id: i32, bid_count: i32) -> Self {
        self.current_bid = Some(amount);
        self.current_bidder_id = Some(bidder_id);
        self.bid_count = bid_count;
        self
    }

    pub fn closed_at(mut self, closed_at: DateTime<Utc>) -> Self {
        self.closed_at = Some(closed_at);
        self
    }

    pub async fn build(self) -> Result<entity::auction_item::Model, DbErr> {
        entity::auction_item::ActiveModel {
            id: ActiveValue::NotSet,
            auction_id: ActiveValue::Set(self.auction_id),
            creator_id: ActiveValue::Set(self.creator_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            image_url: ActiveValue::Set(None),
            currency: ActiveValue::Set(self.currency),
            starting_bid: ActiveValue::Set(self.starting_bid),
            min_increment: ActiveValue::Set(self.min_increment),
            ends_at: ActiveValue::Set(self.ends_at),
            anti_snipe_window: ActiveValue::Set(self.anti_snipe_window),
            current_bid: ActiveValue::Set(self.current_bid),
            current_bidder_id: ActiveValue::Set(self.current_bidder_id),
            bid_count: ActiveValue::Set(self.bid_count),
            closed_at: ActiveValue::Set(self.closed_at),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an item with default values.
pub async fn create_item(
    db: &DatabaseConnection,
    auction_id: i32,
    creator_id: i32,
) -> Result<entity::auction_item::Model, DbErr> {
    ItemFactory::new(db, auction_id, creator_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::helpers;

    #[tokio::test]
    async fn creates_item_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_auction_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (owner, auction, item) = helpers::create_item_with_dependencies(db).await?;

        assert_eq!(item.auction_id, auction.id);
        assert_eq!(item.creator_id, owner.id);
        assert_eq!(item.bid_count, 0);
        assert!(item.current_bid.is_none());
        assert!(item.closed_at.is_none());

        Ok(())
    }
}
