use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BidDto {
    pub id: i32,
    pub item_id: i32,
    /// None for anonymous bids when the caller may not see the bidder.
    pub bidder_id: Option<i32>,
    pub bidder_name: Option<String>,
    pub amount: i64,
    pub anonymous: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlaceBidDto {
    pub amount: i64,
    #[serde(default)]
    pub anonymous: bool,
    /// The current bid the client last saw; the server rejects the bid with
    /// 409 when it no longer matches.
    pub last_seen_bid: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedBidsDto {
    pub bids: Vec<BidDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
