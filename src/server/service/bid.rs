//! Bid placement.
//!
//! Placing a bid is a read-validate-apply sequence. Validation runs on a
//! snapshot of the item; the apply step is a single conditional UPDATE that
//! re-checks the snapshot's current bid, so two concurrent bids on the same
//! amount resolve to exactly one winner and one conflict.

use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{bid::BidRepository, item::ItemRepository, user::UserRepository},
    error::AppError,
    events::{self, broadcaster::EventBroadcaster, AuctionEvent},
    model::bid::{ApplyBidParams, PaginatedBids, PlaceBidOutcome, PlaceBidParams},
    service::mailer::Mailer,
};

pub struct BidService<'a> {
    db: &'a DatabaseConnection,
    broadcaster: &'a EventBroadcaster,
    mailer: &'a Mailer,
}

impl<'a> BidService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        broadcaster: &'a EventBroadcaster,
        mailer: &'a Mailer,
    ) -> Self {
        Self {
            db,
            broadcaster,
            mailer,
        }
    }

    /// Places a bid on an item.
    ///
    /// Returns `PlaceBidOutcome::Conflict` when the item is closed, the
    /// client's view of the current bid is stale, or another bid won the
    /// race; the controller maps that to 409 with the fresh item state.
    /// Validation errors (amount below the minimum, bidder already highest)
    /// are `BadRequest`.
    pub async fn place(
        &self,
        auction_id: i32,
        params: PlaceBidParams,
    ) -> Result<PlaceBidOutcome, AppError> {
        let item_repo = ItemRepository::new(self.db);

        let item = item_repo
            .get_by_id(params.item_id)
            .await?
            .filter(|i| i.auction_id == auction_id)
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;

        let now = Utc::now();

        // A closed item is a conflict like a lost race: the client gets the
        // fresh state showing the item as closed.
        if item.closed_at.is_some() || item.ends_at.map(|ends| ends <= now).unwrap_or(false) {
            return self.conflict(params.item_id).await;
        }

        // Stale client view is a conflict, not a validation error, so the
        // client gets the fresh state to retry against.
        if params.last_seen_bid != item.current_bid {
            return self.conflict(params.item_id).await;
        }

        // The increment step must not overflow; an item whose next minimum
        // exceeds i64 cannot take any further bid.
        let minimum = match item.current_bid {
            Some(current) => current.checked_add(item.min_increment).ok_or_else(|| {
                AppError::BadRequest("No higher bid is possible on this item".to_string())
            })?,
            None => item.starting_bid,
        };
        if params.amount < minimum {
            return Err(AppError::BadRequest(format!(
                "Bid must be at least {}",
                minimum
            )));
        }

        if item.current_bidder_id == Some(params.bidder_id) {
            return Err(AppError::BadRequest(
                "You already hold the highest bid".to_string(),
            ));
        }

        // Anti-snipe: a bid inside the window pushes the deadline out to
        // now + window, but never pulls an already later deadline in.
        let new_ends_at = match (item.ends_at, item.anti_snipe_window) {
            (Some(ends_at), Some(window)) => {
                let window = Duration::seconds(window as i64);
                let extended = now + window;
                (ends_at - now <= window && extended > ends_at).then_some(extended)
            }
            _ => None,
        };

        let txn = self.db.begin().await?;

        let rows_affected = ItemRepository::new(&txn)
            .apply_bid(ApplyBidParams {
                item_id: item.id,
                expected_current_bid: item.current_bid,
                amount: params.amount,
                bidder_id: params.bidder_id,
                new_ends_at,
            })
            .await?;

        if rows_affected == 0 {
            txn.rollback().await?;
            return self.conflict(params.item_id).await;
        }

        let bid = BidRepository::new(&txn)
            .create(item.id, params.bidder_id, params.amount, params.anonymous)
            .await?;

        txn.commit().await?;

        let updated = item_repo
            .get_by_id(item.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Item vanished after bid".to_string()))?;

        let previous_bidder_id = item.current_bidder_id;
        let extended = new_ends_at.is_some();

        // The bid is committed at this point; broadcast and mail failures
        // must not turn a placed bid into an error response.
        if let Err(err) = self.announce(&updated, &bid, extended) {
            tracing::error!("Failed to broadcast bid on item {}: {}", updated.id, err);
        }

        if let Err(err) = self.notify_outbid(&updated, previous_bidder_id).await {
            tracing::error!(
                "Failed to notify the outbid bidder on item {}: {}",
                updated.id,
                err
            );
        }

        Ok(PlaceBidOutcome::Placed {
            bid,
            item: updated,
            extended,
            previous_bidder_id,
        })
    }

    /// Gets paginated bid history of an item, newest first.
    pub async fn get_paginated(
        &self,
        auction_id: i32,
        item_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedBids, AppError> {
        let item_repo = ItemRepository::new(self.db);
        let bid_repo = BidRepository::new(self.db);

        item_repo
            .get_by_id(item_id)
            .await?
            .filter(|i| i.auction_id == auction_id)
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;

        let (bids, total) = bid_repo.get_by_item_paginated(item_id, page, per_page).await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        Ok(PaginatedBids {
            bids,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Reloads the item for a 409 response body.
    async fn conflict(&self, item_id: i32) -> Result<PlaceBidOutcome, AppError> {
        let item = ItemRepository::new(self.db)
            .get_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;

        Ok(PlaceBidOutcome::Conflict { item })
    }

    /// Broadcasts the bid and, when the deadline moved, the extension.
    ///
    /// The bidder id is intentionally left out of the payload: SSE streams
    /// reach every member, so anonymous bids stay anonymous on the wire.
    fn announce(
        &self,
        item: &entity::auction_item::Model,
        bid: &entity::bid::Model,
        extended: bool,
    ) -> Result<(), AppError> {
        self.broadcaster.publish(AuctionEvent::new(
            item.auction_id,
            events::BID_PLACED,
            serde_json::json!({
                "auction_id": item.auction_id,
                "item_id": item.id,
                "amount": bid.amount,
                "bid_count": item.bid_count,
            }),
        )?);

        if extended {
            self.broadcaster.publish(AuctionEvent::new(
                item.auction_id,
                events::ITEM_EXTENDED,
                serde_json::json!({
                    "auction_id": item.auction_id,
                    "item_id": item.id,
                    "ends_at": item.ends_at,
                }),
            )?);
        }

        Ok(())
    }

    /// Mails the previous highest bidder that they lost the lead. Failures
    /// are logged; the bid already stands.
    async fn notify_outbid(
        &self,
        item: &entity::auction_item::Model,
        previous_bidder_id: Option<i32>,
    ) -> Result<(), AppError> {
        let Some(previous_bidder_id) = previous_bidder_id else {
            return Ok(());
        };

        let Some(user) = UserRepository::new(self.db)
            .find_by_id(previous_bidder_id)
            .await?
        else {
            return Ok(());
        };

        self.mailer
            .send_logged(
                &user.email,
                &format!("You have been outbid on \"{}\"", item.name),
                &format!(
                    "Someone placed a higher bid on \"{}\". The bid to beat is now {} {}.\n",
                    item.name,
                    item.current_bid.unwrap_or(0),
                    item.currency
                ),
            )
            .await;

        Ok(())
    }
}
