use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CustomerAdviser::Table)
                    .if_not_exists()
                    .col(pk_auto(CustomerAdviser::Id))
                    .col(string_len(CustomerAdviser::FirstName, 64))
                    .col(string_len(CustomerAdviser::LastName, 64))
                    .col(string_len(CustomerAdviser::EmailAddress, 64))
                    .col(string_len(CustomerAdviser::PhoneNumber, 64))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CustomerAdviser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CustomerAdviser {
    Table,
    Id,
    FirstName,
    LastName,
    EmailAddress,
    PhoneNumber,
}
