use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251016_000001_create_user_table::User,
    m20251016_000002_create_workshop_type_table::WorkshopType,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Workshop::Table)
                    .if_not_exists()
                    .col(pk_auto(Workshop::Id))
                    .col(integer(Workshop::WorkshopTypeId))
                    .col(integer(Workshop::CoordinatorId))
                    .col(integer_null(Workshop::InstructorId))
                    .col(date(Workshop::Date))
                    .col(integer(Workshop::Status).default(0))
                    .col(boolean(Workshop::TncAccepted).default(false))
                    .col(
                        timestamp_with_time_zone(Workshop::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workshop_workshop_type_id")
                            .from(Workshop::Table, Workshop::WorkshopTypeId)
                            .to(WorkshopType::Table, WorkshopType::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workshop_coordinator_id")
                            .from(Workshop::Table, Workshop::CoordinatorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workshop_instructor_id")
                            .from(Workshop::Table, Workshop::InstructorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_workshop_status_date")
                    .table(Workshop::Table)
                    .col(Workshop::Status)
                    .col(Workshop::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Workshop::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Workshop {
    Table,
    Id,
    WorkshopTypeId,
    CoordinatorId,
    InstructorId,
    Date,
    Status,
    TncAccepted,
    CreatedAt,
}
