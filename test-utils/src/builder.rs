use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory
/// SQLite databases. Use the builder pattern to add entity tables, then call
/// `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Auction};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Auction)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using
    /// SQLite backend syntax. Tables should be added in dependency order (tables
    /// with foreign keys after their referenced tables).
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables of the auction domain in dependency order:
    /// User, Auction, AuctionMember, AuctionInvite, AuctionItem, Bid.
    ///
    /// Use this for any test that touches auctions; individual tables are only
    /// worth listing when a test deliberately leaves one out.
    pub fn with_auction_tables(self) -> Self {
        self.with_table(User)
            .with_table(Auction)
            .with_table(AuctionMember)
            .with_table(AuctionInvite)
            .with_table(AuctionItem)
            .with_table(Bid)
    }

    /// Builds and initializes the test context with the configured tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
