use rand::distr::{Alphanumeric, SampleString};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{auction::AuctionRepository, member::MemberRepository},
    error::AppError,
    events::{self, broadcaster::EventBroadcaster, AuctionEvent},
    model::{
        auction::{AuctionWithMeta, CreateAuctionParams, JoinMode, PaginatedAuctions,
            UpdateAuctionParams},
        member::MemberRole,
    },
};

/// Length of generated link tokens.
const LINK_TOKEN_LEN: usize = 32;

pub struct AuctionService<'a> {
    db: &'a DatabaseConnection,
    broadcaster: &'a EventBroadcaster,
}

impl<'a> AuctionService<'a> {
    pub fn new(db: &'a DatabaseConnection, broadcaster: &'a EventBroadcaster) -> Self {
        Self { db, broadcaster }
    }

    /// Creates an auction owned by the caller. The caller becomes the sole
    /// OWNER member.
    pub async fn create(
        &self,
        owner_id: i32,
        params: CreateAuctionParams,
    ) -> Result<AuctionWithMeta, AppError> {
        let repo = AuctionRepository::new(self.db);

        let link_token = Alphanumeric.sample_string(&mut rand::rng(), LINK_TOKEN_LEN);
        let auction = repo.create(owner_id, params, link_token).await?;
        let (member_count, item_count) = repo.counts(auction.id).await?;

        Ok(AuctionWithMeta {
            auction,
            role: MemberRole::Owner,
            member_count,
            item_count,
        })
    }

    /// Gets an auction with the caller's role and aggregate counts.
    pub async fn get_for_member(
        &self,
        auction_id: i32,
        role: MemberRole,
    ) -> Result<AuctionWithMeta, AppError> {
        let repo = AuctionRepository::new(self.db);

        let auction = repo
            .get_by_id(auction_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Auction not found".to_string()))?;
        let (member_count, item_count) = repo.counts(auction_id).await?;

        Ok(AuctionWithMeta {
            auction,
            role,
            member_count,
            item_count,
        })
    }

    /// Gets paginated auctions the user is a member of.
    pub async fn get_for_user_paginated(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedAuctions, AppError> {
        let repo = AuctionRepository::new(self.db);

        let (auctions, total) = repo.get_for_user_paginated(user_id, page, per_page).await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        Ok(PaginatedAuctions {
            auctions,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Updates name, description and join mode.
    pub async fn update(
        &self,
        params: UpdateAuctionParams,
        role: MemberRole,
    ) -> Result<AuctionWithMeta, AppError> {
        let repo = AuctionRepository::new(self.db);

        let auction = repo
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("Auction not found".to_string()))?;
        let (member_count, item_count) = repo.counts(auction.id).await?;

        Ok(AuctionWithMeta {
            auction,
            role,
            member_count,
            item_count,
        })
    }

    pub async fn delete(&self, auction_id: i32) -> Result<(), AppError> {
        let repo = AuctionRepository::new(self.db);

        repo.delete(auction_id).await?;

        Ok(())
    }

    /// Joins an open auction as bidder. Rejected when the auction requires an
    /// invite or a link token.
    pub async fn join_open(
        &self,
        auction_id: i32,
        user_id: i32,
    ) -> Result<entity::auction_member::Model, AppError> {
        let repo = AuctionRepository::new(self.db);

        let auction = repo
            .get_by_id(auction_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Auction not found".to_string()))?;

        if JoinMode::parse(&auction.join_mode)? != JoinMode::Open {
            return Err(AppError::BadRequest(
                "This auction cannot be joined without an invite".to_string(),
            ));
        }

        self.add_member(auction.id, user_id).await
    }

    /// Joins an auction through its link token. Works for link and open
    /// auctions; invite-only auctions reject the token path.
    pub async fn join_by_link(
        &self,
        token: &str,
        user_id: i32,
    ) -> Result<entity::auction_member::Model, AppError> {
        let repo = AuctionRepository::new(self.db);

        let auction = repo
            .find_by_link_token(token)
            .await?
            .ok_or_else(|| AppError::NotFound("Invalid join link".to_string()))?;

        if JoinMode::parse(&auction.join_mode)? == JoinMode::Invite {
            return Err(AppError::BadRequest(
                "This auction cannot be joined without an invite".to_string(),
            ));
        }

        self.add_member(auction.id, user_id).await
    }

    /// Adds a bidder membership and broadcasts the join. Joining twice is a
    /// no-op and does not re-announce.
    async fn add_member(
        &self,
        auction_id: i32,
        user_id: i32,
    ) -> Result<entity::auction_member::Model, AppError> {
        let member_repo = MemberRepository::new(self.db);

        let (member, inserted) = member_repo
            .add_if_absent(auction_id, user_id, MemberRole::Bidder)
            .await?;

        if inserted {
            self.broadcaster.publish(AuctionEvent::new(
                auction_id,
                events::MEMBER_JOINED,
                serde_json::json!({ "auction_id": auction_id, "user_id": user_id }),
            )?);
        }

        Ok(member)
    }
}
