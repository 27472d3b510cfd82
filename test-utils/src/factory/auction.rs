//! Auction factory for creating test auction entities.
//!
//! The factory only inserts the auction row; use
//! `factory::helpers::create_auction_with_owner` when the owner membership
//! row is needed as well.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct AuctionFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    name: String,
    description: Option<String>,
    join_mode: String,
    link_token: String,
}

impl<'a> AuctionFactory<'a> {
    /// Creates a new AuctionFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Auction {id}"`
    /// - join_mode: `"invite"`
    /// - link_token: `"link-token-{id}"`
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            name: format!("Auction {}", id),
            description: None,
            join_mode: "invite".to_string(),
            link_token: format!("link-token-{}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn join_mode(mut self, join_mode: impl Into<String>) -> Self {
        self.join_mode = join_mode.into();
        self
    }

    pub fn link_token(mut self, link_token: impl Into<String>) -> Self {
        self.link_token = link_token.into();
        self
    }

    pub async fn build(self) -> Result<entity::auction::Model, DbErr> {
        entity::auction::ActiveModel {
            id: ActiveValue::NotSet,
            owner_id: ActiveValue::Set(self.owner_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            join_mode: ActiveValue::Set(self.join_mode),
            link_token: ActiveValue::Set(self.link_token),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an auction with default values for the given owner.
pub async fn create_auction(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::auction::Model, DbErr> {
    AuctionFactory::new(db, owner_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory;

    #[tokio::test]
    async fn creates_auction_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_auction_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let owner = factory::create_user(db).await?;
        let auction = create_auction(db, owner.id).await?;

        assert_eq!(auction.owner_id, owner.id);
        assert_eq!(auction.join_mode, "invite");
        assert!(!auction.link_token.is_empty());

        Ok(())
    }
}
