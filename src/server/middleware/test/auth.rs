use super::*;

/// Tests that a session without a user id is rejected.
#[tokio::test]
async fn require_rejects_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let guard = AuthGuard::new(db, session);
    let result = guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests that a logged-in session resolves to the user record.
#[tokio::test]
async fn require_resolves_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let guard = AuthGuard::new(db, session);
    let resolved = guard.require(&[]).await?;

    assert_eq!(resolved.id, user.id);

    Ok(())
}

/// Tests that a session pointing at a deleted user is treated as logged out.
#[tokio::test]
async fn require_rejects_stale_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(9_999).await?;

    let guard = AuthGuard::new(db, session);
    let result = guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(9_999)))
    ));

    Ok(())
}

/// Tests the platform admin permission check.
#[tokio::test]
async fn require_enforces_admin_permission() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let guard = AuthGuard::new(db, session);
    let result = guard.require(&[Permission::Admin]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that non-members are rejected regardless of the required role.
#[tokio::test]
async fn require_member_rejects_non_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (owner, auction) = factory::helpers::create_auction_with_owner(db).await?;
    let outsider = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(outsider.id).await?;

    let guard = AuthGuard::new(db, session);
    let result = guard.require_member(auction.id, MemberRole::Bidder).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotAMember(_, _)))
    ));
    assert_ne!(owner.id, outsider.id);

    Ok(())
}

/// Tests the role ordering: a bidder clears the bidder bar but not the
/// admin bar, while the owner clears everything.
#[tokio::test]
async fn require_member_enforces_minimum_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (owner, auction) = factory::helpers::create_auction_with_owner(db).await?;
    let bidder = factory::helpers::create_bidder(db, auction.id).await?;

    AuthSession::new(session).set_user_id(bidder.id).await?;
    let guard = AuthGuard::new(db, session);

    let (_, role) = guard.require_member(auction.id, MemberRole::Bidder).await?;
    assert_eq!(role, MemberRole::Bidder);

    let denied = guard.require_member(auction.id, MemberRole::Admin).await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::InsufficientRole(_, _)))
    ));

    AuthSession::new(session).set_user_id(owner.id).await?;
    let guard = AuthGuard::new(db, session);
    let (_, role) = guard.require_member(auction.id, MemberRole::Owner).await?;
    assert_eq!(role, MemberRole::Owner);

    Ok(())
}
