use super::*;

/// Tests looking up several users at once.
///
/// Verifies that matching users are returned ordered by id and that unknown ids
/// are skipped.
///
/// Expected: Ok with the two existing users in id order
#[tokio::test]
async fn returns_existing_users_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db).id(7).build().await?;
    factory::user::UserFactory::new(db).id(3).build().await?;

    let repo = UserRepository::new(db);
    let users = repo.find_by_ids(&[7, 3, 1000]).await?;

    let ids: Vec<i32> = users.iter().map(|user| user.id).collect();
    assert_eq!(ids, vec![3, 7]);

    Ok(())
}

/// Tests looking up an empty id list.
///
/// Expected: Ok with no users
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let users = UserRepository::new(db).find_by_ids(&[]).await?;
    assert!(users.is_empty());

    Ok(())
}
