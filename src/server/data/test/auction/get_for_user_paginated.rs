use super::*;

/// Tests that only auctions the user belongs to are returned, together with
/// the user's role and counts.
#[tokio::test]
async fn returns_memberships_with_role_and_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, auction) = factory::helpers::create_auction_with_owner(db).await?;
    factory::create_item(db, auction.id, owner.id).await?;
    factory::create_item(db, auction.id, owner.id).await?;

    // Second auction the user is not part of.
    factory::helpers::create_auction_with_owner(db).await?;

    let repo = AuctionRepository::new(db);
    let (auctions, total) = repo.get_for_user_paginated(owner.id, 0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(auctions.len(), 1);

    let meta = &auctions[0];
    assert_eq!(meta.auction.id, auction.id);
    assert_eq!(meta.role, MemberRole::Owner);
    assert_eq!(meta.member_count, 1);
    assert_eq!(meta.item_count, 2);

    Ok(())
}

/// Tests the bidder role coming back for a joined auction.
#[tokio::test]
async fn reports_bidder_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, auction) = factory::helpers::create_auction_with_owner(db).await?;
    let bidder = factory::helpers::create_bidder(db, auction.id).await?;

    let repo = AuctionRepository::new(db);
    let (auctions, _) = repo.get_for_user_paginated(bidder.id, 0, 10).await?;

    assert_eq!(auctions.len(), 1);
    assert_eq!(auctions[0].role, MemberRole::Bidder);
    assert_eq!(auctions[0].member_count, 2);

    Ok(())
}
