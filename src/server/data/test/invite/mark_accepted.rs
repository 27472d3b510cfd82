use super::*;

/// Tests marking an invite accepted.
#[tokio::test]
async fn marks_accepted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, auction) = factory::helpers::create_auction_with_owner(db).await?;
    let invite = factory::create_invite(db, auction.id, owner.id).await?;

    let repo = InviteRepository::new(db);
    let accepted = repo.mark_accepted(invite.id).await?.unwrap();

    assert!(accepted.accepted_at.is_some());
    assert!(repo.list_pending(auction.id).await?.is_empty());

    Ok(())
}
