use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuctionDto {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub description: Option<String>,
    /// "invite", "link" or "open".
    pub join_mode: String,
    /// Only present for owners and admins; used to build the join link.
    pub link_token: Option<String>,
    /// The caller's role in this auction.
    pub role: String,
    pub member_count: u64,
    pub item_count: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateAuctionDto {
    pub name: String,
    pub description: Option<String>,
    pub join_mode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateAuctionDto {
    pub name: String,
    pub description: Option<String>,
    pub join_mode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedAuctionsDto {
    pub auctions: Vec<AuctionDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
