use sea_orm::DatabaseConnection;

use crate::server::{
    data::item::ItemRepository,
    error::{auth::AuthError, AppError},
    events::{self, broadcaster::EventBroadcaster, AuctionEvent},
    model::{
        item::{CreateItemParams, ItemWithVisibility, PaginatedItems, UpdateItemParams},
        member::MemberRole,
    },
};

pub struct ItemService<'a> {
    db: &'a DatabaseConnection,
    broadcaster: &'a EventBroadcaster,
}

impl<'a> ItemService<'a> {
    pub fn new(db: &'a DatabaseConnection, broadcaster: &'a EventBroadcaster) -> Self {
        Self { db, broadcaster }
    }

    /// Creates an item and broadcasts it to the auction.
    pub async fn create(&self, params: CreateItemParams) -> Result<ItemWithVisibility, AppError> {
        let repo = ItemRepository::new(self.db);

        let item = repo.create(params).await?;

        self.broadcaster.publish(AuctionEvent::new(
            item.auction_id,
            events::ITEM_CREATED,
            serde_json::json!({ "auction_id": item.auction_id, "item_id": item.id, "name": item.name }),
        )?);

        Ok(ItemWithVisibility {
            item,
            highest_anonymous: false,
        })
    }

    /// Gets an item, verifying it belongs to the auction.
    pub async fn get(
        &self,
        auction_id: i32,
        item_id: i32,
    ) -> Result<ItemWithVisibility, AppError> {
        let repo = ItemRepository::new(self.db);

        let result = repo
            .get_with_visibility(item_id)
            .await?
            .filter(|r| r.item.auction_id == auction_id)
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;

        Ok(result)
    }

    /// Gets paginated items of an auction.
    pub async fn get_paginated(
        &self,
        auction_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedItems, AppError> {
        let repo = ItemRepository::new(self.db);

        let (items, total) = repo
            .get_by_auction_paginated(auction_id, page, per_page)
            .await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        Ok(PaginatedItems {
            items,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Updates an item.
    ///
    /// Creators may edit their own items; admins and owners any item. Once a
    /// bid exists the economic fields are frozen: currency, starting bid and
    /// minimum increment must stay unchanged, and the item cannot be edited
    /// at all after it closed.
    pub async fn update(
        &self,
        params: UpdateItemParams,
        caller_id: i32,
        caller_role: MemberRole,
    ) -> Result<ItemWithVisibility, AppError> {
        let repo = ItemRepository::new(self.db);

        let existing = repo
            .get_by_id(params.id)
            .await?
            .filter(|i| i.auction_id == params.auction_id)
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;

        check_can_manage(&existing, caller_id, caller_role)?;

        if existing.closed_at.is_some() {
            return Err(AppError::BadRequest(
                "A closed item cannot be edited".to_string(),
            ));
        }

        if existing.bid_count > 0 {
            let frozen_changed = existing.currency != params.currency
                || existing.starting_bid != params.starting_bid
                || existing.min_increment != params.min_increment;
            if frozen_changed {
                return Err(AppError::BadRequest(
                    "Currency, starting bid and minimum increment cannot change once bids exist"
                        .to_string(),
                ));
            }
        }

        let item = repo
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;

        self.broadcaster.publish(AuctionEvent::new(
            item.auction_id,
            events::ITEM_UPDATED,
            serde_json::json!({ "auction_id": item.auction_id, "item_id": item.id }),
        )?);

        let highest_anonymous = repo
            .get_with_visibility(item.id)
            .await?
            .map(|r| r.highest_anonymous)
            .unwrap_or(false);

        Ok(ItemWithVisibility {
            item,
            highest_anonymous,
        })
    }

    /// Deletes an item. Rejected once any bid exists.
    pub async fn delete(
        &self,
        auction_id: i32,
        item_id: i32,
        caller_id: i32,
        caller_role: MemberRole,
    ) -> Result<(), AppError> {
        let repo = ItemRepository::new(self.db);

        let existing = repo
            .get_by_id(item_id)
            .await?
            .filter(|i| i.auction_id == auction_id)
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;

        check_can_manage(&existing, caller_id, caller_role)?;

        if existing.bid_count > 0 {
            return Err(AppError::BadRequest(
                "An item with bids cannot be deleted".to_string(),
            ));
        }

        repo.delete(item_id).await?;

        self.broadcaster.publish(AuctionEvent::new(
            auction_id,
            events::ITEM_DELETED,
            serde_json::json!({ "auction_id": auction_id, "item_id": item_id }),
        )?);

        Ok(())
    }
}

/// Creators manage their own items, admins and owners every item.
fn check_can_manage(
    item: &entity::auction_item::Model,
    caller_id: i32,
    caller_role: MemberRole,
) -> Result<(), AppError> {
    if item.creator_id == caller_id || caller_role >= MemberRole::Admin {
        Ok(())
    } else {
        Err(AuthError::AccessDenied(
            caller_id,
            "Only the item's creator or an auction admin may manage it".to_string(),
        )
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory, factory::auction_item::ItemFactory};

    fn update_params(item: &entity::auction_item::Model) -> UpdateItemParams {
        UpdateItemParams {
            id: item.id,
            auction_id: item.auction_id,
            name: item.name.clone(),
            description: item.description.clone(),
            image_url: item.image_url.clone(),
            currency: item.currency.clone(),
            starting_bid: item.starting_bid,
            min_increment: item.min_increment,
            ends_at: item.ends_at,
            anti_snipe_window: item.anti_snipe_window,
        }
    }

    #[tokio::test]
    async fn freezes_economic_fields_once_bids_exist() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_auction_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let broadcaster = EventBroadcaster::new(8);
        let service = ItemService::new(db, &broadcaster);

        let (owner, auction) = factory::helpers::create_auction_with_owner(db).await?;
        let bidder = factory::helpers::create_bidder(db, auction.id).await?;
        let item = ItemFactory::new(db, auction.id, owner.id)
            .with_current_bid(1_000, bidder.id, 1)
            .build()
            .await?;

        let mut params = update_params(&item);
        params.starting_bid += 500;
        let result = service.update(params, owner.id, MemberRole::Owner).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));

        // Non-economic fields stay editable.
        let mut params = update_params(&item);
        params.name = "Renamed".to_string();
        let updated = service.update(params, owner.id, MemberRole::Owner).await?;
        assert_eq!(updated.item.name, "Renamed");

        Ok(())
    }

    #[tokio::test]
    async fn rejects_edits_on_closed_items() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_auction_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let broadcaster = EventBroadcaster::new(8);
        let service = ItemService::new(db, &broadcaster);

        let (owner, auction) = factory::helpers::create_auction_with_owner(db).await?;
        let item = ItemFactory::new(db, auction.id, owner.id)
            .closed_at(chrono::Utc::now())
            .build()
            .await?;

        let result = service
            .update(update_params(&item), owner.id, MemberRole::Owner)
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    #[tokio::test]
    async fn creators_manage_only_their_own_items() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_auction_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let broadcaster = EventBroadcaster::new(8);
        let service = ItemService::new(db, &broadcaster);

        let (owner, auction, item) = factory::helpers::create_item_with_dependencies(db).await?;
        let other_creator = factory::create_user(db).await?;
        factory::create_member(db, auction.id, other_creator.id, "creator").await?;

        let denied = service
            .update(update_params(&item), other_creator.id, MemberRole::Creator)
            .await;
        assert!(matches!(denied, Err(AppError::AuthErr(_))));

        // An auction admin may, even without being the creator.
        let admin = factory::create_user(db).await?;
        factory::create_member(db, auction.id, admin.id, "admin").await?;
        service
            .update(update_params(&item), admin.id, MemberRole::Admin)
            .await?;

        assert_eq!(item.creator_id, owner.id);

        Ok(())
    }

    #[tokio::test]
    async fn refuses_to_delete_items_with_bids() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_auction_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let broadcaster = EventBroadcaster::new(8);
        let service = ItemService::new(db, &broadcaster);

        let (owner, auction) = factory::helpers::create_auction_with_owner(db).await?;
        let bidder = factory::helpers::create_bidder(db, auction.id).await?;
        let item = ItemFactory::new(db, auction.id, owner.id)
            .with_current_bid(1_000, bidder.id, 1)
            .build()
            .await?;

        let result = service
            .delete(auction.id, item.id, owner.id, MemberRole::Owner)
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));

        let unbid = factory::create_item(db, auction.id, owner.id).await?;
        service
            .delete(auction.id, unbid.id, owner.id, MemberRole::Owner)
            .await?;

        Ok(())
    }
}
