use super::*;

/// Tests updating name, description and join mode.
#[tokio::test]
async fn updates_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, auction) = factory::helpers::create_auction_with_owner(db).await?;

    let repo = AuctionRepository::new(db);
    let updated = repo
        .update(UpdateAuctionParams {
            id: auction.id,
            name: "Renamed".to_string(),
            description: None,
            join_mode: JoinMode::Open,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert!(updated.description.is_none());
    assert_eq!(updated.join_mode, "open");
    // The link token survives updates.
    assert_eq!(updated.link_token, auction.link_token);

    Ok(())
}

/// Tests that updating a missing auction yields None.
#[tokio::test]
async fn returns_none_for_unknown_auction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuctionRepository::new(db);
    let result = repo
        .update(UpdateAuctionParams {
            id: 9999,
            name: "Ghost".to_string(),
            description: None,
            join_mode: JoinMode::Invite,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
