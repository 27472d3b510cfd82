use super::*;

/// Tests changing a member's role.
#[tokio::test]
async fn updates_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, auction) = factory::helpers::create_auction_with_owner(db).await?;
    let bidder = factory::helpers::create_bidder(db, auction.id).await?;

    let repo = MemberRepository::new(db);
    let updated = repo
        .update_role(auction.id, bidder.id, MemberRole::Creator)
        .await?
        .unwrap();

    assert_eq!(updated.role, "creator");

    Ok(())
}

/// Tests that a missing membership yields None.
#[tokio::test]
async fn returns_none_for_non_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, auction) = factory::helpers::create_auction_with_owner(db).await?;
    let outsider = factory::create_user(db).await?;

    let repo = MemberRepository::new(db);
    let result = repo
        .update_role(auction.id, outsider.id, MemberRole::Admin)
        .await?;

    assert!(result.is_none());

    Ok(())
}
