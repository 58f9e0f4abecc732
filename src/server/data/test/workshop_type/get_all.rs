use super::*;

/// Tests listing the workshop type catalog.
///
/// Expected: Ok with types ordered by name
#[tokio::test]
async fn returns_types_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WorkshopType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::workshop_type::WorkshopTypeFactory::new(db)
        .name("Scilab")
        .build()
        .await?;
    factory::workshop_type::WorkshopTypeFactory::new(db)
        .name("Python")
        .build()
        .await?;

    let repo = WorkshopTypeRepository::new(db);
    let types = repo.get_all().await?;

    let names: Vec<&str> = types.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Python", "Scilab"]);

    Ok(())
}

/// Tests existence checks against the catalog.
///
/// Expected: Ok(true) for a stored type, Ok(false) otherwise
#[tokio::test]
async fn checks_type_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WorkshopType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let workshop_type = factory::create_workshop_type(db).await?;

    let repo = WorkshopTypeRepository::new(db);

    assert!(repo.exists(workshop_type.id).await?);
    assert!(!repo.exists(workshop_type.id + 100).await?);

    Ok(())
}
