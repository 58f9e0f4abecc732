use super::*;

/// Tests listing memberships across teams.
///
/// Expected: Ok with `(team_id, user_id)` pairs ordered by team then user
#[tokio::test]
async fn returns_memberships_ordered_by_team_and_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::user::create_user(db).await?;
    let a = factory::user::create_user(db).await?;
    let b = factory::user::create_user(db).await?;
    let first = factory::create_team(db, creator.id, &[b.id, a.id]).await?;
    let second = factory::create_team(db, creator.id, &[a.id]).await?;

    let repo = TeamRepository::new(db);
    let memberships = repo.get_all_memberships().await?;

    assert_eq!(
        memberships,
        vec![(first.id, a.id), (first.id, b.id), (second.id, a.id)]
    );
    assert_eq!(repo.get_member_ids(first.id).await?, vec![a.id, b.id]);

    Ok(())
}
