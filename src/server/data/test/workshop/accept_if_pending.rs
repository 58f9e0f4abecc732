use super::*;

/// Tests accepting a pending workshop.
///
/// Verifies that the conditional update sets the status and the instructor together.
///
/// Expected: Ok(true) with workshop accepted by the instructor
#[tokio::test]
async fn accepts_pending_workshop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, workshop) = factory::helpers::create_workshop_with_dependencies(db).await?;
    let instructor = factory::user::create_user(db).await?;

    let repo = WorkshopRepository::new(db);
    let accepted = repo.accept_if_pending(workshop.id, instructor.id).await?;

    assert!(accepted);
    let stored = repo.find_by_id(workshop.id).await?.unwrap();
    assert_eq!(stored.status, WorkshopStatus::Accepted);
    assert_eq!(stored.instructor_id, Some(instructor.id));

    Ok(())
}

/// Tests accepting an already accepted workshop.
///
/// Verifies that the status condition prevents a second instructor from taking over
/// the workshop.
///
/// Expected: Ok(false) with the first instructor kept
#[tokio::test]
async fn does_not_accept_twice() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, workshop) = factory::helpers::create_workshop_with_dependencies(db).await?;
    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;

    let repo = WorkshopRepository::new(db);
    assert!(repo.accept_if_pending(workshop.id, first.id).await?);
    assert!(!repo.accept_if_pending(workshop.id, second.id).await?);

    let stored = repo.find_by_id(workshop.id).await?.unwrap();
    assert_eq!(stored.instructor_id, Some(first.id));

    Ok(())
}

/// Tests accepting a workshop that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_workshop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::user::create_user(db).await?;

    let accepted = WorkshopRepository::new(db)
        .accept_if_pending(999, instructor.id)
        .await?;

    assert!(!accepted);

    Ok(())
}
