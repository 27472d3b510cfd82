use super::*;
use test_utils::factory;

/// Tests granting and revoking the platform-admin flag.
#[tokio::test]
async fn sets_and_clears_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo.set_admin(user.id, true).await?.unwrap();
    assert!(updated.admin);

    let updated = repo.set_admin(user.id, false).await?.unwrap();
    assert!(!updated.admin);

    Ok(())
}

/// Tests that a missing user yields None instead of an error.
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.set_admin(9999, true).await?;

    assert!(result.is_none());

    Ok(())
}
