//! Bid domain models and the bid transition outcome.

use chrono::{DateTime, Utc};

use crate::model::bid::{BidDto, PaginatedBidsDto};

/// Parameters of the conditional highest-bid update.
#[derive(Debug, Clone)]
pub struct ApplyBidParams {
    pub item_id: i32,
    /// Guard: the update only applies while the stored current bid still
    /// matches; `None` matches only an item without bids.
    pub expected_current_bid: Option<i64>,
    pub amount: i64,
    pub bidder_id: i32,
    /// New deadline when the anti-snipe extension fires.
    pub new_ends_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct PlaceBidParams {
    pub item_id: i32,
    pub bidder_id: i32,
    pub amount: i64,
    pub anonymous: bool,
    /// The current bid the client last saw; `None` means "no bids yet".
    pub last_seen_bid: Option<i64>,
}

/// Result of the bid transition.
#[derive(Debug, Clone)]
pub enum PlaceBidOutcome {
    /// The bid was accepted and committed.
    Placed {
        bid: entity::bid::Model,
        item: entity::auction_item::Model,
        /// Whether the anti-snipe extension moved `ends_at`.
        extended: bool,
        /// Highest bidder before this bid, for outbid notification.
        previous_bidder_id: Option<i32>,
    },
    /// The optimistic check failed: someone else bid first. Carries the
    /// fresh item state for the 409 response body.
    Conflict { item: entity::auction_item::Model },
}

/// A bid row enriched with the bidder's user record.
#[derive(Debug, Clone)]
pub struct BidWithUser {
    pub bid: entity::bid::Model,
    pub user: Option<entity::user::Model>,
}

impl BidWithUser {
    /// Converts to a DTO for a specific viewer. Anonymous bids hide the
    /// bidder unless the viewer is the bidder or may reveal bidders
    /// (auction admin/owner).
    pub fn into_dto(self, viewer_id: i32, reveal_bidders: bool) -> BidDto {
        let visible = !self.bid.anonymous || reveal_bidders || self.bid.user_id == viewer_id;

        BidDto {
            id: self.bid.id,
            item_id: self.bid.item_id,
            bidder_id: visible.then_some(self.bid.user_id),
            bidder_name: if visible {
                self.user.map(|u| u.name)
            } else {
                None
            },
            amount: self.bid.amount,
            anonymous: self.bid.anonymous,
            created_at: self.bid.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedBids {
    pub bids: Vec<BidWithUser>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedBids {
    pub fn into_dto(self, viewer_id: i32, reveal_bidders: bool) -> PaginatedBidsDto {
        PaginatedBidsDto {
            bids: self
                .bids
                .into_iter()
                .map(|b| b.into_dto(viewer_id, reveal_bidders))
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
