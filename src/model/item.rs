use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemDto {
    pub id: i32,
    pub auction_id: i32,
    pub creator_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub currency: String,
    /// Minor units (cents).
    pub starting_bid: i64,
    pub min_increment: i64,
    pub ends_at: Option<DateTime<Utc>>,
    pub anti_snipe_window: Option<i32>,
    pub current_bid: Option<i64>,
    /// Hidden when the current highest bid is anonymous and the caller may
    /// not see the bidder.
    pub current_bidder_id: Option<i32>,
    pub bid_count: i32,
    pub closed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateItemDto {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub currency: String,
    pub starting_bid: i64,
    pub min_increment: i64,
    pub ends_at: Option<DateTime<Utc>>,
    pub anti_snipe_window: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateItemDto {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub currency: String,
    pub starting_bid: i64,
    pub min_increment: i64,
    pub ends_at: Option<DateTime<Utc>>,
    pub anti_snipe_window: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedItemsDto {
    pub items: Vec<ItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
