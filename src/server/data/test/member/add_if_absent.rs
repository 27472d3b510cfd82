use super::*;

/// Tests adding a fresh membership.
#[tokio::test]
async fn adds_new_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, auction) = factory::helpers::create_auction_with_owner(db).await?;
    let user = factory::create_user(db).await?;

    let repo = MemberRepository::new(db);
    let (member, inserted) = repo
        .add_if_absent(auction.id, user.id, MemberRole::Bidder)
        .await?;

    assert!(inserted);
    assert_eq!(member.role, "bidder");

    Ok(())
}

/// Tests that re-joining neither duplicates the row nor downgrades the role.
#[tokio::test]
async fn rejoin_keeps_existing_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, auction) = factory::helpers::create_auction_with_owner(db).await?;
    let user = factory::create_user(db).await?;
    factory::create_member(db, auction.id, user.id, "admin").await?;

    let repo = MemberRepository::new(db);
    let (member, inserted) = repo
        .add_if_absent(auction.id, user.id, MemberRole::Bidder)
        .await?;

    assert!(!inserted);
    assert_eq!(member.role, "admin");

    let members = repo.list_with_users(auction.id).await?;
    assert_eq!(members.len(), 2);

    Ok(())
}

/// Tests that members come back with their user records.
#[tokio::test]
async fn lists_members_with_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, auction) = factory::helpers::create_auction_with_owner(db).await?;
    factory::helpers::create_bidder(db, auction.id).await?;

    let repo = MemberRepository::new(db);
    let members = repo.list_with_users(auction.id).await?;

    assert_eq!(members.len(), 2);
    // Oldest first: the owner joined at creation.
    assert_eq!(members[0].member.user_id, owner.id);
    assert!(members.iter().all(|m| m.user.is_some()));

    Ok(())
}
