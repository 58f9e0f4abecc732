//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let workshop_type = factory::workshop_type::create_workshop_type(&db).await?;
//!
//!     // Create with all dependencies
//!     let (coordinator, workshop_type, workshop) =
//!         factory::helpers::create_workshop_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let instructor = factory::user::UserFactory::new(&db)
//!     .first_name("Ada")
//!     .state("MH")
//!     .build()
//!     .await?;
//!
//! let workshop = factory::workshop::WorkshopFactory::new(&db, workshop_type.id, coordinator.id)
//!     .accepted_by(instructor.id)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod team;
pub mod user;
pub mod workshop;
pub mod workshop_type;

pub use team::create_team;
pub use user::create_user;
pub use workshop::create_workshop;
pub use workshop_type::create_workshop_type;
