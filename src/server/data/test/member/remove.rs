use super::*;

/// Tests removing a member.
#[tokio::test]
async fn removes_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, auction) = factory::helpers::create_auction_with_owner(db).await?;
    let bidder = factory::helpers::create_bidder(db, auction.id).await?;

    let repo = MemberRepository::new(db);
    assert!(repo.remove(auction.id, bidder.id).await?);
    assert!(repo.find(auction.id, bidder.id).await?.is_none());

    // Removing again reports that nothing was there.
    assert!(!repo.remove(auction.id, bidder.id).await?);

    Ok(())
}
