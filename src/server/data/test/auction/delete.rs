use super::*;

/// Tests deleting an auction.
#[tokio::test]
async fn deletes_auction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, auction) = factory::helpers::create_auction_with_owner(db).await?;

    let repo = AuctionRepository::new(db);
    repo.delete(auction.id).await?;

    assert!(repo.get_by_id(auction.id).await?.is_none());

    Ok(())
}
