use super::*;

/// Tests creating a new user from provider userinfo.
///
/// Expected: Ok with the user created and the admin flag unset
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(&userinfo("sub-1", "alice@example.com", "Alice"), false)
        .await?;

    assert_eq!(user.subject, "sub-1");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.name, "Alice");
    assert!(!user.admin);

    Ok(())
}

/// Tests that logging in again refreshes the profile fields.
///
/// Expected: same user row, updated email and name
#[tokio::test]
async fn refreshes_profile_on_login() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo
        .upsert(&userinfo("sub-1", "old@example.com", "Old Name"), false)
        .await?;
    let second = repo
        .upsert(&userinfo("sub-1", "new@example.com", "New Name"), false)
        .await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.email, "new@example.com");
    assert_eq!(second.name, "New Name");

    Ok(())
}

/// Tests that the admin flag is only ever raised by upsert, never lowered.
///
/// Expected: flag stays true after a login without the admin grant
#[tokio::test]
async fn admin_flag_is_sticky() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.upsert(&userinfo("sub-1", "a@example.com", "A"), true)
        .await?;
    let user = repo
        .upsert(&userinfo("sub-1", "a@example.com", "A"), false)
        .await?;

    assert!(user.admin);

    Ok(())
}
