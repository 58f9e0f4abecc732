//! Shared helper utilities for factory methods.
//!
//! Provides unique id generation and convenience methods for creating entities
//! together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a pending workshop together with its coordinator and workshop type.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((coordinator, workshop_type, workshop))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_workshop_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::workshop_type::Model,
        entity::workshop::Model,
    ),
    DbErr,
> {
    let coordinator = crate::factory::user::create_user(db).await?;
    let workshop_type = crate::factory::workshop_type::create_workshop_type(db).await?;
    let workshop =
        crate::factory::workshop::create_workshop(db, workshop_type.id, coordinator.id).await?;

    Ok((coordinator, workshop_type, workshop))
}
