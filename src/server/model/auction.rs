//! Auction domain models and operation parameters.

use crate::model::auction::{AuctionDto, CreateAuctionDto, PaginatedAuctionsDto, UpdateAuctionDto};
use crate::server::error::AppError;
use crate::server::model::member::MemberRole;

/// How users get into an auction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinMode {
    /// Membership only through emailed invites.
    Invite,
    /// Anyone holding the link token may join as bidder.
    Link,
    /// Anyone may join as bidder.
    Open,
}

impl JoinMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invite => "invite",
            Self::Link => "link",
            Self::Open => "open",
        }
    }

    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "invite" => Ok(Self::Invite),
            "link" => Ok(Self::Link),
            "open" => Ok(Self::Open),
            other => Err(AppError::BadRequest(format!("Invalid join mode: {}", other))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAuctionParams {
    pub name: String,
    pub description: Option<String>,
    pub join_mode: JoinMode,
}

impl CreateAuctionParams {
    pub fn from_dto(dto: CreateAuctionDto) -> Result<Self, AppError> {
        Ok(Self {
            name: dto.name,
            description: dto.description,
            join_mode: JoinMode::parse(&dto.join_mode)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateAuctionParams {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub join_mode: JoinMode,
}

impl UpdateAuctionParams {
    pub fn from_dto(id: i32, dto: UpdateAuctionDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: dto.name,
            description: dto.description,
            join_mode: JoinMode::parse(&dto.join_mode)?,
        })
    }
}

/// An auction enriched with the caller's role and aggregate counts.
#[derive(Debug, Clone)]
pub struct AuctionWithMeta {
    pub auction: entity::auction::Model,
    pub role: MemberRole,
    pub member_count: u64,
    pub item_count: u64,
}

impl AuctionWithMeta {
    /// Converts to a DTO. The link token is only revealed to owners and
    /// admins; everyone else gets `None`.
    pub fn into_dto(self) -> AuctionDto {
        let link_token = if self.role >= MemberRole::Admin {
            Some(self.auction.link_token)
        } else {
            None
        };

        AuctionDto {
            id: self.auction.id,
            owner_id: self.auction.owner_id,
            name: self.auction.name,
            description: self.auction.description,
            join_mode: self.auction.join_mode,
            link_token,
            role: self.role.as_str().to_string(),
            member_count: self.member_count,
            item_count: self.item_count,
            created_at: self.auction.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedAuctions {
    pub auctions: Vec<AuctionWithMeta>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedAuctions {
    pub fn into_dto(self) -> PaginatedAuctionsDto {
        PaginatedAuctionsDto {
            auctions: self.auctions.into_iter().map(|a| a.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
