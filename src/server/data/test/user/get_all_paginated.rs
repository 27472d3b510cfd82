use super::*;
use test_utils::factory::user::UserFactory;

/// Tests pagination over the user list.
///
/// Expected: first page holds the page size, total counts every user
#[tokio::test]
async fn paginates_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for i in 0..5 {
        UserFactory::new(db).name(format!("User {}", i)).build().await?;
    }

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_all_paginated(0, 3).await?;

    assert_eq!(users.len(), 3);
    assert_eq!(total, 5);

    let (users, _) = repo.get_all_paginated(1, 3).await?;
    assert_eq!(users.len(), 2);

    Ok(())
}

/// Tests that users come back ordered by name.
#[tokio::test]
async fn orders_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).name("Charlie").build().await?;
    UserFactory::new(db).name("Alice").build().await?;
    UserFactory::new(db).name("Bob").build().await?;

    let repo = UserRepository::new(db);
    let (users, _) = repo.get_all_paginated(0, 10).await?;

    let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);

    Ok(())
}
