use super::*;

/// Tests recording a bid and counting per item.
#[tokio::test]
async fn records_bid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, auction, item) = factory::helpers::create_item_with_dependencies(db).await?;
    let bidder = factory::helpers::create_bidder(db, auction.id).await?;

    let repo = BidRepository::new(db);
    let bid = repo.create(item.id, bidder.id, 1_500, true).await?;

    assert_eq!(bid.item_id, item.id);
    assert_eq!(bid.amount, 1_500);
    assert!(bid.anonymous);
    assert_eq!(repo.count_by_item(item.id).await?, 1);

    Ok(())
}
