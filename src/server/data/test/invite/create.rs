use super::*;

/// Tests creating an invite and finding it by token.
#[tokio::test]
async fn creates_and_finds_by_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, auction) = factory::helpers::create_auction_with_owner(db).await?;

    let repo = InviteRepository::new(db);
    let invite = repo
        .create(
            auction.id,
            "guest@example.com".to_string(),
            MemberRole::Creator,
            "tok-1".to_string(),
            owner.id,
        )
        .await?;

    assert_eq!(invite.role, "creator");
    assert!(invite.accepted_at.is_none());

    let found = repo.find_by_token("tok-1").await?.unwrap();
    assert_eq!(found.id, invite.id);

    Ok(())
}

/// Tests that only unaccepted invites count as pending.
#[tokio::test]
async fn pending_exists_ignores_accepted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, auction) = factory::helpers::create_auction_with_owner(db).await?;

    let repo = InviteRepository::new(db);

    test_utils::factory::auction_invite::InviteFactory::new(db, auction.id, owner.id)
        .email("done@example.com")
        .accepted()
        .build()
        .await?;

    assert!(!repo.pending_exists(auction.id, "done@example.com").await?);

    factory::create_invite(db, auction.id, owner.id).await?;
    let pending = repo.list_pending(auction.id).await?;
    assert_eq!(pending.len(), 1);

    Ok(())
}
