use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SoftwareProduct::Table)
                    .if_not_exists()
                    .col(pk_auto(SoftwareProduct::Id))
                    .col(string_len(SoftwareProduct::Name, 64))
                    .col(string_len(SoftwareProduct::Category, 64))
                    .col(string_len(SoftwareProduct::Version, 16))
                    .col(string_len_null(SoftwareProduct::Adviser, 64))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SoftwareProduct::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SoftwareProduct {
    Table,
    Id,
    Name,
    Category,
    Version,
    Adviser,
}
