//! Real-time event fan-out.
//!
//! Domain events are published to a single broadcast channel and delivered to
//! clients through per-auction SSE streams. Subscribers filter on the auction
//! id, so one channel serves every auction.

pub mod broadcaster;

use serde::Serialize;

/// Event names as they appear on the wire.
pub const BID_PLACED: &str = "bid.placed";
pub const ITEM_EXTENDED: &str = "item.extended";
pub const ITEM_CREATED: &str = "item.created";
pub const ITEM_UPDATED: &str = "item.updated";
pub const ITEM_DELETED: &str = "item.deleted";
pub const ITEM_CLOSED: &str = "item.closed";
pub const MEMBER_JOINED: &str = "member.joined";

/// A domain event scoped to one auction.
#[derive(Debug, Clone)]
pub struct AuctionEvent {
    pub auction_id: i32,
    pub name: &'static str,
    pub data: serde_json::Value,
}

impl AuctionEvent {
    pub fn new(
        auction_id: i32,
        name: &'static str,
        data: impl Serialize,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            auction_id,
            name,
            data: serde_json::to_value(data)?,
        })
    }
}
