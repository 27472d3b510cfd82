use super::*;

fn params(item_id: i32, expected: Option<i64>, amount: i64, bidder_id: i32) -> ApplyBidParams {
    ApplyBidParams {
        item_id,
        expected_current_bid: expected,
        amount,
        bidder_id,
        new_ends_at: None,
    }
}

/// Tests the first bid transition on an item without bids.
///
/// Expected: one row affected, bid state written, count incremented
#[tokio::test]
async fn applies_first_bid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, auction, item) = factory::helpers::create_item_with_dependencies(db).await?;
    let bidder = factory::helpers::create_bidder(db, auction.id).await?;

    let repo = ItemRepository::new(db);
    let rows = repo.apply_bid(params(item.id, None, 1_000, bidder.id)).await?;
    assert_eq!(rows, 1);

    let updated = repo.get_by_id(item.id).await?.unwrap();
    assert_eq!(updated.current_bid, Some(1_000));
    assert_eq!(updated.current_bidder_id, Some(bidder.id));
    assert_eq!(updated.bid_count, 1);

    Ok(())
}

/// Tests that a stale expected bid leaves the row untouched.
///
/// This is the race guard: of two bids built on the same snapshot, only the
/// first matches the stored current bid.
#[tokio::test]
async fn stale_expectation_is_a_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, auction, item) = factory::helpers::create_item_with_dependencies(db).await?;
    let first = factory::helpers::create_bidder(db, auction.id).await?;
    let second = factory::helpers::create_bidder(db, auction.id).await?;

    let repo = ItemRepository::new(db);
    assert_eq!(repo.apply_bid(params(item.id, None, 1_000, first.id)).await?, 1);

    // Both raced from the no-bids snapshot; the second one loses.
    assert_eq!(
        repo.apply_bid(params(item.id, None, 1_100, second.id)).await?,
        0
    );

    let updated = repo.get_by_id(item.id).await?.unwrap();
    assert_eq!(updated.current_bid, Some(1_000));
    assert_eq!(updated.current_bidder_id, Some(first.id));
    assert_eq!(updated.bid_count, 1);

    // Built on the fresh snapshot, the retry lands.
    assert_eq!(
        repo.apply_bid(params(item.id, Some(1_000), 1_100, second.id))
            .await?,
        1
    );

    Ok(())
}

/// Tests that a closed item rejects the transition.
#[tokio::test]
async fn closed_item_is_a_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, auction) = factory::helpers::create_auction_with_owner(db).await?;
    let item = ItemFactory::new(db, auction.id, owner.id)
        .closed_at(Utc::now())
        .build()
        .await?;
    let bidder = factory::helpers::create_bidder(db, auction.id).await?;

    let repo = ItemRepository::new(db);
    let rows = repo.apply_bid(params(item.id, None, 1_000, bidder.id)).await?;

    assert_eq!(rows, 0);

    Ok(())
}

/// Tests that the transition moves the deadline when asked to.
#[tokio::test]
async fn writes_new_deadline() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, auction) = factory::helpers::create_auction_with_owner(db).await?;
    let old_deadline = Utc::now() + Duration::seconds(30);
    let item = ItemFactory::new(db, auction.id, owner.id)
        .ends_at(old_deadline)
        .anti_snipe_window(120)
        .build()
        .await?;
    let bidder = factory::helpers::create_bidder(db, auction.id).await?;

    let new_deadline = Utc::now() + Duration::seconds(120);
    let repo = ItemRepository::new(db);
    let rows = repo
        .apply_bid(ApplyBidParams {
            item_id: item.id,
            expected_current_bid: None,
            amount: 1_000,
            bidder_id: bidder.id,
            new_ends_at: Some(new_deadline),
        })
        .await?;
    assert_eq!(rows, 1);

    let updated = repo.get_by_id(item.id).await?.unwrap();
    assert!(updated.ends_at.unwrap() > old_deadline);

    Ok(())
}
