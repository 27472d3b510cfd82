//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// Ensures each factory-created entity gets a unique identifier to prevent
/// collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an auction with its owner.
///
/// The owner membership row is created alongside, matching what the
/// application does on auction creation.
pub async fn create_auction_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::auction::Model), DbErr> {
    let owner = crate::factory::user::create_user(db).await?;
    let auction = crate::factory::auction::create_auction(db, owner.id).await?;
    crate::factory::auction_member::create_member(db, auction.id, owner.id, "owner").await?;

    Ok((owner, auction))
}

/// Creates an item with its full dependency chain: owner, auction with the
/// owner membership, and the item created by the owner.
pub async fn create_item_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::auction::Model,
        entity::auction_item::Model,
    ),
    DbErr,
> {
    let (owner, auction) = create_auction_with_owner(db).await?;
    let item = crate::factory::auction_item::create_item(db, auction.id, owner.id).await?;

    Ok((owner, auction, item))
}

/// Creates a bidder: a fresh user joined to the auction with the bidder role.
pub async fn create_bidder(
    db: &DatabaseConnection,
    auction_id: i32,
) -> Result<entity::user::Model, DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    crate::factory::auction_member::create_member(db, auction_id, user.id, "bidder").await?;

    Ok(user)
}
