//! Item domain models and operation parameters.

use chrono::{DateTime, Utc};

use crate::model::item::{CreateItemDto, ItemDto, PaginatedItemsDto, UpdateItemDto};
use crate::server::error::AppError;

#[derive(Debug, Clone)]
pub struct CreateItemParams {
    pub auction_id: i32,
    pub creator_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub currency: String,
    pub starting_bid: i64,
    pub min_increment: i64,
    pub ends_at: Option<DateTime<Utc>>,
    pub anti_snipe_window: Option<i32>,
}

impl CreateItemParams {
    pub fn from_dto(
        auction_id: i32,
        creator_id: i32,
        dto: CreateItemDto,
    ) -> Result<Self, AppError> {
        validate_money(dto.starting_bid, dto.min_increment)?;
        validate_anti_snipe(dto.anti_snipe_window)?;

        Ok(Self {
            auction_id,
            creator_id,
            name: dto.name,
            description: dto.description,
            image_url: dto.image_url,
            currency: dto.currency.to_ascii_uppercase(),
            starting_bid: dto.starting_bid,
            min_increment: dto.min_increment,
            ends_at: dto.ends_at,
            anti_snipe_window: dto.anti_snipe_window,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateItemParams {
    pub id: i32,
    pub auction_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub currency: String,
    pub starting_bid: i64,
    pub min_increment: i64,
    pub ends_at: Option<DateTime<Utc>>,
    pub anti_snipe_window: Option<i32>,
}

impl UpdateItemParams {
    pub fn from_dto(id: i32, auction_id: i32, dto: UpdateItemDto) -> Result<Self, AppError> {
        validate_money(dto.starting_bid, dto.min_increment)?;
        validate_anti_snipe(dto.anti_snipe_window)?;

        Ok(Self {
            id,
            auction_id,
            name: dto.name,
            description: dto.description,
            image_url: dto.image_url,
            currency: dto.currency.to_ascii_uppercase(),
            starting_bid: dto.starting_bid,
            min_increment: dto.min_increment,
            ends_at: dto.ends_at,
            anti_snipe_window: dto.anti_snipe_window,
        })
    }
}

/// Upper bound for money fields in minor units. Keeps increment arithmetic
/// well clear of i64 overflow.
const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

fn validate_money(starting_bid: i64, min_increment: i64) -> Result<(), AppError> {
    if starting_bid < 0 {
        return Err(AppError::BadRequest(
            "Starting bid must not be negative".to_string(),
        ));
    }
    if min_increment <= 0 {
        return Err(AppError::BadRequest(
            "Minimum increment must be positive".to_string(),
        ));
    }
    if starting_bid > MAX_AMOUNT || min_increment > MAX_AMOUNT {
        return Err(AppError::BadRequest(format!(
            "Amounts must not exceed {} minor units",
            MAX_AMOUNT
        )));
    }
    Ok(())
}

fn validate_anti_snipe(window: Option<i32>) -> Result<(), AppError> {
    if let Some(window) = window {
        if window <= 0 {
            return Err(AppError::BadRequest(
                "Anti-snipe window must be positive".to_string(),
            ));
        }
    }
    Ok(())
}

/// An item plus the anonymity of its current highest bid, used to decide
/// whether the bidder may be shown to the caller.
#[derive(Debug, Clone)]
pub struct ItemWithVisibility {
    pub item: entity::auction_item::Model,
    /// True when the highest bid was placed anonymously.
    pub highest_anonymous: bool,
}

impl ItemWithVisibility {
    /// Converts to a DTO for a specific viewer. `reveal_bidders` is set for
    /// auction admins and owners; the current bidder always sees themself.
    pub fn into_dto(self, viewer_id: i32, reveal_bidders: bool) -> ItemDto {
        let current_bidder_id = match self.item.current_bidder_id {
            Some(bidder) if self.highest_anonymous => {
                if reveal_bidders || bidder == viewer_id {
                    Some(bidder)
                } else {
                    None
                }
            }
            other => other,
        };

        let closed = self.item.closed_at.is_some()
            || self
                .item
                .ends_at
                .map(|ends| ends <= Utc::now())
                .unwrap_or(false);

        ItemDto {
            id: self.item.id,
            auction_id: self.item.auction_id,
            creator_id: self.item.creator_id,
            name: self.item.name,
            description: self.item.description,
            image_url: self.item.image_url,
            currency: self.item.currency,
            starting_bid: self.item.starting_bid,
            min_increment: self.item.min_increment,
            ends_at: self.item.ends_at,
            anti_snipe_window: self.item.anti_snipe_window,
            current_bid: self.item.current_bid,
            current_bidder_id,
            bid_count: self.item.bid_count,
            closed,
            created_at: self.item.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedItems {
    pub items: Vec<ItemWithVisibility>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedItems {
    pub fn into_dto(self, viewer_id: i32, reveal_bidders: bool) -> PaginatedItemsDto {
        PaginatedItemsDto {
            items: self
                .items
                .into_iter()
                .map(|i| i.into_dto(viewer_id, reveal_bidders))
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(starting_bid: i64, min_increment: i64) -> CreateItemDto {
        CreateItemDto {
            name: "Painting".to_string(),
            description: None,
            image_url: None,
            currency: "usd".to_string(),
            starting_bid,
            min_increment,
            ends_at: None,
            anti_snipe_window: None,
        }
    }

    #[test]
    fn accepts_amounts_within_bounds() {
        let params = CreateItemParams::from_dto(1, 1, dto(1_000, 100)).unwrap();

        assert_eq!(params.currency, "USD");
        assert_eq!(params.starting_bid, 1_000);
    }

    #[test]
    fn rejects_amounts_over_the_cap() {
        let starting = CreateItemParams::from_dto(1, 1, dto(MAX_AMOUNT + 1, 100));
        assert!(matches!(starting, Err(AppError::BadRequest(_))));

        let increment = CreateItemParams::from_dto(1, 1, dto(1_000, MAX_AMOUNT + 1));
        assert!(matches!(increment, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn rejects_negative_and_zero_amounts() {
        let negative = CreateItemParams::from_dto(1, 1, dto(-1, 100));
        assert!(matches!(negative, Err(AppError::BadRequest(_))));

        let zero_increment = CreateItemParams::from_dto(1, 1, dto(1_000, 0));
        assert!(matches!(zero_increment, Err(AppError::BadRequest(_))));
    }
}
