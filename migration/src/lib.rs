pub use sea_orm_migration::prelude::*;

mod m20251016_000001_create_user_table;
mod m20251016_000002_create_workshop_type_table;
mod m20251016_000003_create_workshop_table;
mod m20251016_000004_create_team_table;
mod m20251016_000005_create_team_member_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251016_000001_create_user_table::Migration),
            Box::new(m20251016_000002_create_workshop_type_table::Migration),
            Box::new(m20251016_000003_create_workshop_table::Migration),
            Box::new(m20251016_000004_create_team_table::Migration),
            Box::new(m20251016_000005_create_team_member_table::Migration),
        ]
    }
}
