use super::*;

/// Tests authenticating a request with a valid token.
///
/// Verifies that roles come from the group claim and that the user record is created
/// from the token's profile claims.
///
/// Expected: Ok(AuthUser) with instructor role and a stored user
#[tokio::test]
async fn authenticates_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let token_service = TokenService::new(SECRET);

    let headers = bearer(&issue(&claims(99, &["instructor", "reviewer"]), SECRET));
    let user = AuthGuard::new(db, &token_service, &headers)
        .authenticate()
        .await?;

    assert_eq!(user.id, 99);
    assert_eq!(user.username, "user99");
    assert!(user.has_role(Role::Instructor));
    assert!(!user.has_role(Role::Coordinator));

    let stored = entity::prelude::User::find_by_id(99).one(db).await?.unwrap();
    assert_eq!(stored.username, "user99");
    assert_eq!(stored.state, Some("MH".to_string()));

    Ok(())
}

/// Tests that repeated authentication refreshes the stored profile.
///
/// Expected: Ok with the user record holding the latest claims
#[tokio::test]
async fn refreshes_user_from_latest_claims() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let token_service = TokenService::new(SECRET);

    let headers = bearer(&issue(&claims(7, &["coordinator"]), SECRET));
    AuthGuard::new(db, &token_service, &headers)
        .authenticate()
        .await?;

    let mut updated = claims(7, &["coordinator"]);
    updated.state = Some("KA".to_string());
    let headers = bearer(&issue(&updated, SECRET));
    AuthGuard::new(db, &token_service, &headers)
        .authenticate()
        .await?;

    let stored = entity::prelude::User::find_by_id(7).one(db).await?.unwrap();
    assert_eq!(stored.state, Some("KA".to_string()));

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let token_service = TokenService::new(SECRET);
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &token_service, &headers)
        .authenticate()
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a request with a non-bearer Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_non_bearer_scheme() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let token_service = TokenService::new(SECRET);
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_static("Basic dXNlcjpwYXNz"),
    );

    let result = AuthGuard::new(db, &token_service, &headers)
        .authenticate()
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token signed with the wrong secret.
///
/// Expected: Err(AuthError::InvalidToken) and no user stored
#[tokio::test]
async fn rejects_forged_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let token_service = TokenService::new(SECRET);

    let headers = bearer(&issue(&claims(5, &["admin"]), b"forged"));
    let result = AuthGuard::new(db, &token_service, &headers)
        .authenticate()
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
    assert!(entity::prelude::User::find_by_id(5).one(db).await?.is_none());

    Ok(())
}
