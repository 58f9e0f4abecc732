use super::*;

/// Tests a coordinator proposing a workshop.
///
/// Verifies that the workshop is pending, has no instructor, and is coordinated by
/// the caller.
///
/// Expected: Ok with pending workshop
#[tokio::test]
async fn creates_pending_workshop_for_coordinator() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).id(42).build().await?;
    let workshop_type = factory::create_workshop_type(db).await?;

    let details = WorkshopService::new(db)
        .propose(&coordinator(user.id), proposal(workshop_type.id, "2025-10-01"))
        .await?;

    assert_eq!(details.workshop.status, WorkshopStatus::Pending);
    assert!(details.workshop.instructor_id.is_none());
    assert!(details.instructor.is_none());
    assert_eq!(details.coordinator.id, 42);
    assert_eq!(details.workshop_type.id, workshop_type.id);
    assert_eq!(details.workshop.date, date(2025, 10, 1));

    Ok(())
}

/// Tests that instructors cannot propose workshops.
///
/// Expected: Err(AuthError::AccessDenied) and no workshop stored
#[tokio::test]
async fn rejects_non_coordinator() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let workshop_type = factory::create_workshop_type(db).await?;

    let result = WorkshopService::new(db)
        .propose(&instructor(user.id), proposal(workshop_type.id, "2025-10-01"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(WorkshopService::new(db)
        .list_for_user(user.id)
        .await?
        .is_empty());

    Ok(())
}

/// Tests proposing without accepting the terms and conditions.
///
/// Expected: Err(WorkshopError::TncNotAccepted)
#[tokio::test]
async fn rejects_unaccepted_terms() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let workshop_type = factory::create_workshop_type(db).await?;

    let result = WorkshopService::new(db)
        .propose(
            &coordinator(user.id),
            ProposeWorkshopParam {
                tnc_accepted: false,
                ..proposal(workshop_type.id, "2025-10-01")
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::WorkshopErr(WorkshopError::TncNotAccepted))
    ));

    Ok(())
}

/// Tests proposing with a missing or malformed date.
///
/// Expected: Err(WorkshopError::DateRequired) and Err(WorkshopError::InvalidDate)
#[tokio::test]
async fn rejects_missing_or_invalid_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let workshop_type = factory::create_workshop_type(db).await?;
    let service = WorkshopService::new(db);

    let missing = service
        .propose(
            &coordinator(user.id),
            ProposeWorkshopParam {
                date: None,
                ..proposal(workshop_type.id, "")
            },
        )
        .await;
    assert!(matches!(
        missing,
        Err(AppError::WorkshopErr(WorkshopError::DateRequired))
    ));

    let invalid = service
        .propose(&coordinator(user.id), proposal(workshop_type.id, "2025-02-30"))
        .await;
    assert!(matches!(
        invalid,
        Err(AppError::WorkshopErr(WorkshopError::InvalidDate(_)))
    ));

    Ok(())
}

/// Tests proposing without a workshop type.
///
/// Expected: Err(WorkshopError::WorkshopTypeRequired)
#[tokio::test]
async fn rejects_missing_workshop_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = WorkshopService::new(db)
        .propose(
            &coordinator(user.id),
            ProposeWorkshopParam {
                workshop_type_id: None,
                date: Some("2025-10-01".to_string()),
                tnc_accepted: true,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::WorkshopErr(WorkshopError::WorkshopTypeRequired))
    ));

    Ok(())
}

/// Tests proposing a workshop of a type that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_workshop_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = WorkshopService::new(db)
        .propose(&coordinator(user.id), proposal(999, "2025-10-01"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that an admin may propose workshops.
///
/// Expected: Ok with pending workshop
#[tokio::test]
async fn allows_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let workshop_type = factory::create_workshop_type(db).await?;
    let admin = AuthUser::new(user.id, "root", ["admin"]);

    let details = WorkshopService::new(db)
        .propose(&admin, proposal(workshop_type.id, "2025-10-01"))
        .await?;

    assert_eq!(details.workshop.status, WorkshopStatus::Pending);

    Ok(())
}
