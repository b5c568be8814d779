use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000003_create_location_table::Location;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactPerson::Table)
                    .if_not_exists()
                    .col(pk_auto(ContactPerson::Id))
                    .col(integer(ContactPerson::LocationId))
                    .col(string_len(ContactPerson::FirstName, 64))
                    .col(string_len(ContactPerson::LastName, 64))
                    .col(string_len(ContactPerson::EmailAddress, 64))
                    .col(string_len(ContactPerson::PhoneNumber, 64))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contact_person_location_id")
                            .from(ContactPerson::Table, ContactPerson::LocationId)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContactPerson::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ContactPerson {
    Table,
    Id,
    LocationId,
    FirstName,
    LastName,
    EmailAddress,
    PhoneNumber,
}
