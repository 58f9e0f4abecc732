use super::*;

/// Tests membership checks.
///
/// Verifies that members are recognised and that creating a team does not by itself
/// make the creator a member.
///
/// Expected: Ok(true) for the member, Ok(false) for the creator and for outsiders
#[tokio::test]
async fn checks_team_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::user::create_user(db).await?;
    let member = factory::user::create_user(db).await?;
    let outsider = factory::user::create_user(db).await?;
    let team = factory::create_team(db, creator.id, &[member.id]).await?;

    let repo = TeamRepository::new(db);

    assert!(repo.is_member(team.id, member.id).await?);
    assert!(!repo.is_member(team.id, creator.id).await?);
    assert!(!repo.is_member(team.id, outsider.id).await?);

    Ok(())
}
