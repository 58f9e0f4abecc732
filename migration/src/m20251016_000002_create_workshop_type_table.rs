use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkshopType::Table)
                    .if_not_exists()
                    .col(pk_auto(WorkshopType::Id))
                    .col(string(WorkshopType::Name))
                    .col(string(WorkshopType::Category))
                    .col(integer(WorkshopType::DurationDays).default(1))
                    .col(text_null(WorkshopType::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkshopType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WorkshopType {
    Table,
    Id,
    Name,
    Category,
    DurationDays,
    Description,
}
