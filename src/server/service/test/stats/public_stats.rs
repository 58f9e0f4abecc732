use super::*;

/// Tests public statistics over the default window with no accepted workshops.
///
/// Expected: Ok with empty list and empty frequency tables
#[tokio::test]
async fn returns_empty_stats_for_empty_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_workshop_with_dependencies(db).await?;

    let stats = StatsService::new(db)
        .public_stats(param(date(2025, 10, 1)))
        .await?;

    assert!(stats.workshops.is_empty());
    assert!(stats.counts_by_state.is_empty());
    assert!(stats.counts_by_type.is_empty());

    Ok(())
}

/// Tests the default window of today through today plus the window length.
///
/// Expected: Ok with workshops dated today and on the last day, not the day after
#[tokio::test]
async fn uses_default_window_when_dates_incomplete() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let coordinator = factory::create_user(db).await?;
    let instructor = factory::create_user(db).await?;
    let workshop_type = factory::create_workshop_type(db).await?;

    let mut expected = Vec::new();
    for day in [1, 16, 17] {
        let workshop =
            factory::workshop::WorkshopFactory::new(db, workshop_type.id, coordinator.id)
                .date(date(2025, 10, day))
                .accepted_by(instructor.id)
                .build()
                .await?;
        if day != 17 {
            expected.push(workshop.id);
        }
    }

    // Only one bound supplied, so it is ignored in favour of the default window.
    let stats = StatsService::new(db)
        .public_stats(PublicStatsParam {
            from_date: Some("2025-01-01".to_string()),
            ..param(date(2025, 10, 1))
        })
        .await?;

    let ids: Vec<i32> = stats.workshops.iter().map(|w| w.workshop.id).collect();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests an explicit window with state and type tallies.
///
/// Verifies that coordinators without a region are counted under "Unknown" and that
/// types are tallied by name.
///
/// Expected: Ok with frequency tables over the filtered workshops
#[tokio::test]
async fn counts_by_state_and_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let maharashtra = factory::user::UserFactory::new(db).state("MH").build().await?;
    let nowhere = factory::create_user(db).await?;
    let instructor = factory::create_user(db).await?;
    let python = factory::workshop_type::WorkshopTypeFactory::new(db)
        .name("Python")
        .build()
        .await?;
    let scilab = factory::workshop_type::WorkshopTypeFactory::new(db)
        .name("Scilab")
        .build()
        .await?;

    for (type_id, coordinator_id) in [
        (python.id, maharashtra.id),
        (python.id, nowhere.id),
        (scilab.id, maharashtra.id),
    ] {
        factory::workshop::WorkshopFactory::new(db, type_id, coordinator_id)
            .date(date(2024, 3, 10))
            .accepted_by(instructor.id)
            .build()
            .await?;
    }

    let stats = StatsService::new(db)
        .public_stats(PublicStatsParam {
            from_date: Some("2024-03-01".to_string()),
            to_date: Some("2024-03-31".to_string()),
            ..param(date(2025, 10, 1))
        })
        .await?;

    assert_eq!(stats.workshops.len(), 3);
    assert_eq!(stats.counts_by_state.get("MH"), Some(&2));
    assert_eq!(stats.counts_by_state.get("Unknown"), Some(&1));
    assert_eq!(stats.counts_by_type.get("Python"), Some(&2));
    assert_eq!(stats.counts_by_type.get("Scilab"), Some(&1));

    Ok(())
}

/// Tests malformed dates.
///
/// Expected: Err(WorkshopError::InvalidDate) even when only one bound is supplied
#[tokio::test]
async fn rejects_malformed_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StatsService::new(db)
        .public_stats(PublicStatsParam {
            to_date: Some("01/10/2025".to_string()),
            ..param(date(2025, 10, 1))
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::WorkshopErr(WorkshopError::InvalidDate(_)))
    ));

    Ok(())
}

/// Tests an unsupported sort key.
///
/// Expected: Err(WorkshopError::InvalidSortKey)
#[tokio::test]
async fn rejects_unknown_sort_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StatsService::new(db)
        .public_stats(PublicStatsParam {
            sort: Some("coordinator__email".to_string()),
            ..param(date(2025, 10, 1))
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::WorkshopErr(WorkshopError::InvalidSortKey(_)))
    ));

    Ok(())
}

/// Tests filtering by a workshop type id supplied as text.
///
/// Expected: Ok with only workshops of that type
#[tokio::test]
async fn filters_by_workshop_type_text() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let coordinator = factory::create_user(db).await?;
    let instructor = factory::create_user(db).await?;
    let python = factory::create_workshop_type(db).await?;
    let scilab = factory::create_workshop_type(db).await?;

    let expected = factory::workshop::WorkshopFactory::new(db, python.id, coordinator.id)
        .date(date(2025, 10, 3))
        .accepted_by(instructor.id)
        .build()
        .await?;
    factory::workshop::WorkshopFactory::new(db, scilab.id, coordinator.id)
        .date(date(2025, 10, 3))
        .accepted_by(instructor.id)
        .build()
        .await?;

    let stats = StatsService::new(db)
        .public_stats(PublicStatsParam {
            workshop_type: Some(python.id.to_string()),
            ..param(date(2025, 10, 1))
        })
        .await?;

    let ids: Vec<i32> = stats.workshops.iter().map(|w| w.workshop.id).collect();
    assert_eq!(ids, vec![expected.id]);

    Ok(())
}

/// Tests a non-numeric workshop type filter.
///
/// Expected: Err(WorkshopError::InvalidWorkshopType)
#[tokio::test]
async fn rejects_non_numeric_workshop_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StatsService::new(db)
        .public_stats(PublicStatsParam {
            workshop_type: Some("python".to_string()),
            ..param(date(2025, 10, 1))
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::WorkshopErr(WorkshopError::InvalidWorkshopType(_)))
    ));

    Ok(())
}

/// Tests a default window that runs past the last representable date.
///
/// Expected: Err(InternalError::WindowOverflow) instead of a panic
#[tokio::test]
async fn reports_window_overflow() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StatsService::new(db)
        .public_stats(PublicStatsParam {
            window_days: 100_000_000,
            ..param(date(2025, 10, 1))
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::InternalErr(InternalError::WindowOverflow { .. }))
    ));

    Ok(())
}
