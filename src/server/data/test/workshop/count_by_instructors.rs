use super::*;

/// Tests counting workshops per instructor.
///
/// Verifies that all statuses are counted, that only the requested instructors are
/// included, and that instructors without workshops are absent from the map.
///
/// Expected: Ok with counts for instructors that have workshops
#[tokio::test]
async fn counts_workshops_for_requested_instructors() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let coordinator = factory::user::create_user(db).await?;
    let busy = factory::user::create_user(db).await?;
    let idle = factory::user::create_user(db).await?;
    let outsider = factory::user::create_user(db).await?;
    let workshop_type = factory::workshop_type::create_workshop_type(db).await?;

    for day in [1, 2] {
        factory::workshop::WorkshopFactory::new(db, workshop_type.id, coordinator.id)
            .date(date(2025, 10, day))
            .accepted_by(busy.id)
            .build()
            .await?;
    }
    factory::workshop::WorkshopFactory::new(db, workshop_type.id, coordinator.id)
        .accepted_by(outsider.id)
        .build()
        .await?;

    let counts = WorkshopRepository::new(db)
        .count_by_instructors(&[busy.id, idle.id])
        .await?;

    assert_eq!(counts.get(&busy.id), Some(&2));
    assert!(!counts.contains_key(&idle.id));
    assert!(!counts.contains_key(&outsider.id));

    Ok(())
}

/// Tests counting with no instructors requested.
///
/// Expected: Ok with empty map
#[tokio::test]
async fn returns_empty_for_no_instructors() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let counts = WorkshopRepository::new(db).count_by_instructors(&[]).await?;

    assert!(counts.is_empty());

    Ok(())
}
