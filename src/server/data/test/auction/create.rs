use super::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

/// Tests that creating an auction also creates the owner membership row.
#[tokio::test]
async fn creates_auction_with_owner_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let repo = AuctionRepository::new(db);
    let auction = repo
        .create(
            owner.id,
            CreateAuctionParams {
                name: "Charity Gala".to_string(),
                description: Some("Annual fundraiser".to_string()),
                join_mode: JoinMode::Invite,
            },
            "token-1".to_string(),
        )
        .await?;

    assert_eq!(auction.owner_id, owner.id);
    assert_eq!(auction.join_mode, "invite");

    let member = entity::prelude::AuctionMember::find()
        .filter(entity::auction_member::Column::AuctionId.eq(auction.id))
        .filter(entity::auction_member::Column::UserId.eq(owner.id))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(member.role, MemberRole::Owner.as_str());

    Ok(())
}

/// Tests looking an auction up by its link token.
#[tokio::test]
async fn finds_by_link_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, auction) = factory::helpers::create_auction_with_owner(db).await?;

    let repo = AuctionRepository::new(db);
    let found = repo.find_by_link_token(&auction.link_token).await?;
    assert_eq!(found.map(|a| a.id), Some(auction.id));

    let missing = repo.find_by_link_token("no-such-token").await?;
    assert!(missing.is_none());

    Ok(())
}
