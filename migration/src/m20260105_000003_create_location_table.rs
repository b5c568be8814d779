use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_customer_table::Customer,
    m20260105_000002_create_customer_adviser_table::CustomerAdviser,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Location::Table)
                    .if_not_exists()
                    .col(pk_auto(Location::Id))
                    .col(integer(Location::CustomerId))
                    .col(integer_null(Location::AdviserId))
                    .col(string_len(Location::Name, 64))
                    .col(string_len(Location::EmailAddress, 64))
                    .col(string_len(Location::PhoneNumber, 64))
                    .col(string_len(Location::Street, 64))
                    .col(string_len(Location::HouseNumber, 8))
                    .col(string_len(Location::Postcode, 16))
                    .col(string_len(Location::City, 64))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_location_customer_id")
                            .from(Location::Table, Location::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_location_adviser_id")
                            .from(Location::Table, Location::AdviserId)
                            .to(CustomerAdviser::Table, CustomerAdviser::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Location::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Location {
    Table,
    Id,
    CustomerId,
    AdviserId,
    Name,
    EmailAddress,
    PhoneNumber,
    Street,
    HouseNumber,
    Postcode,
    City,
}
