use super::*;

/// Tests the full lifecycle of a single workshop.
///
/// Coordinator 42 proposes a workshop of type 3 on 2025-10-01, instructor 99 accepts
/// it, instructor 100 then fails to accept it, and both participants see it in their
/// lists while an unrelated user does not.
///
/// Expected: pending -> accepted by 99, second accept rejected, lists consistent
#[tokio::test]
async fn propose_accept_and_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db).id(42).build().await?;
    factory::user::UserFactory::new(db).id(99).build().await?;
    factory::user::UserFactory::new(db).id(100).build().await?;
    factory::user::UserFactory::new(db).id(7).build().await?;
    for _ in 0..3 {
        factory::create_workshop_type(db).await?;
    }

    let service = WorkshopService::new(db);

    let proposed = service
        .propose(&coordinator(42), proposal(3, "2025-10-01"))
        .await?;
    assert_eq!(proposed.workshop.status, WorkshopStatus::Pending);
    assert!(proposed.workshop.instructor_id.is_none());
    assert_eq!(proposed.workshop.coordinator_id, 42);

    let accepted = service.accept(proposed.workshop.id, &instructor(99)).await?;
    assert_eq!(accepted.workshop.status, WorkshopStatus::Accepted);
    assert_eq!(accepted.workshop.instructor_id, Some(99));

    let again = service.accept(proposed.workshop.id, &instructor(100)).await;
    assert!(matches!(
        again,
        Err(AppError::WorkshopErr(WorkshopError::NotPending(_)))
    ));

    let for_coordinator = service.list_for_user(42).await?;
    let for_instructor = service.list_for_user(99).await?;
    assert_eq!(for_coordinator.len(), 1);
    assert_eq!(for_instructor.len(), 1);
    assert_eq!(for_instructor[0].workshop.instructor_id, Some(99));
    assert!(service.list_for_user(7).await?.is_empty());

    Ok(())
}
