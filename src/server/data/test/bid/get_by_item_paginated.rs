use super::*;

/// Tests that history comes back newest first with bidder records attached.
#[tokio::test]
async fn returns_newest_first_with_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, auction, item) = factory::helpers::create_item_with_dependencies(db).await?;
    let alice = factory::helpers::create_bidder(db, auction.id).await?;
    let bob = factory::helpers::create_bidder(db, auction.id).await?;

    factory::create_bid(db, item.id, alice.id, 1_000).await?;
    BidFactory::new(db, item.id, bob.id, 1_100)
        .anonymous(true)
        .build()
        .await?;

    let repo = BidRepository::new(db);
    let (bids, total) = repo.get_by_item_paginated(item.id, 0, 10).await?;

    assert_eq!(total, 2);
    assert_eq!(bids[0].bid.amount, 1_100);
    assert_eq!(bids[1].bid.amount, 1_000);
    assert_eq!(bids[0].user.as_ref().unwrap().id, bob.id);
    assert_eq!(bids[1].user.as_ref().unwrap().id, alice.id);

    Ok(())
}

/// Tests paging boundaries on bid history.
#[tokio::test]
async fn paginates_history() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, auction, item) = factory::helpers::create_item_with_dependencies(db).await?;
    let bidder = factory::helpers::create_bidder(db, auction.id).await?;

    for i in 0..5 {
        factory::create_bid(db, item.id, bidder.id, 1_000 + i * 100).await?;
    }

    let repo = BidRepository::new(db);
    let (first, total) = repo.get_by_item_paginated(item.id, 0, 2).await?;
    let (last, _) = repo.get_by_item_paginated(item.id, 2, 2).await?;

    assert_eq!(total, 5);
    assert_eq!(first.len(), 2);
    assert_eq!(last.len(), 1);

    Ok(())
}
