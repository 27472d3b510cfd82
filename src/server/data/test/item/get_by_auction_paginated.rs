use super::*;
use test_utils::factory::bid::BidFactory;

/// Tests pagination over an auction's items.
#[tokio::test]
async fn paginates_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, auction) = factory::helpers::create_auction_with_owner(db).await?;
    for _ in 0..3 {
        factory::create_item(db, auction.id, owner.id).await?;
    }

    let repo = ItemRepository::new(db);
    let (page, total) = repo.get_by_auction_paginated(auction.id, 0, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(page.len(), 2);

    let (rest, _) = repo.get_by_auction_paginated(auction.id, 1, 2).await?;
    assert_eq!(rest.len(), 1);

    Ok(())
}

/// Tests that an anonymous highest bid is flagged on the listing.
#[tokio::test]
async fn flags_anonymous_highest_bid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, auction) = factory::helpers::create_auction_with_owner(db).await?;
    let bidder = factory::helpers::create_bidder(db, auction.id).await?;

    let hidden = ItemFactory::new(db, auction.id, owner.id)
        .with_current_bid(1_000, bidder.id, 1)
        .build()
        .await?;
    BidFactory::new(db, hidden.id, bidder.id, 1_000)
        .anonymous(true)
        .build()
        .await?;

    let open = ItemFactory::new(db, auction.id, owner.id)
        .with_current_bid(2_000, bidder.id, 1)
        .build()
        .await?;
    factory::create_bid(db, open.id, bidder.id, 2_000).await?;

    let repo = ItemRepository::new(db);
    let (items, _) = repo.get_by_auction_paginated(auction.id, 0, 10).await?;

    let by_id = |id: i32| items.iter().find(|i| i.item.id == id).unwrap();
    assert!(by_id(hidden.id).highest_anonymous);
    assert!(!by_id(open.id).highest_anonymous);

    Ok(())
}

/// Tests that an item without bids never reads as anonymous.
#[tokio::test]
async fn unbid_item_is_not_anonymous() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, auction, item) = factory::helpers::create_item_with_dependencies(db).await?;

    let repo = ItemRepository::new(db);
    let found = repo.get_with_visibility(item.id).await?.unwrap();

    assert!(!found.highest_anonymous);
    assert_eq!(found.item.auction_id, auction.id);

    Ok(())
}
