use super::*;

/// Tests that only open items past their deadline are due.
#[tokio::test]
async fn finds_due_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, auction) = factory::helpers::create_auction_with_owner(db).await?;
    let now = Utc::now();

    let expired = ItemFactory::new(db, auction.id, owner.id)
        .ends_at(now - Duration::minutes(1))
        .build()
        .await?;
    // Still running.
    ItemFactory::new(db, auction.id, owner.id)
        .ends_at(now + Duration::minutes(10))
        .build()
        .await?;
    // Expired but already settled.
    ItemFactory::new(db, auction.id, owner.id)
        .ends_at(now - Duration::minutes(5))
        .closed_at(now - Duration::minutes(4))
        .build()
        .await?;
    // No deadline at all.
    factory::create_item(db, auction.id, owner.id).await?;

    let repo = ItemRepository::new(db);
    let due = repo.find_due(now).await?;

    assert_eq!(due.len(), 1);
    assert_eq!(due[0].id, expired.id);

    Ok(())
}

/// Tests that closing is idempotent under repeated runs.
#[tokio::test]
async fn close_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, auction) = factory::helpers::create_auction_with_owner(db).await?;
    let item = ItemFactory::new(db, auction.id, owner.id)
        .ends_at(Utc::now() - Duration::minutes(1))
        .build()
        .await?;

    let repo = ItemRepository::new(db);
    let now = Utc::now();

    assert_eq!(repo.close(item.id, now).await?, 1);
    assert_eq!(repo.close(item.id, now).await?, 0);

    let closed = repo.get_by_id(item.id).await?.unwrap();
    assert!(closed.closed_at.is_some());

    Ok(())
}
