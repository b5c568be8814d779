use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_customer_table::Customer,
    m20260105_000003_create_location_table::Location,
    m20260105_000007_create_software_module_table::SoftwareModule,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(License::Table)
                    .if_not_exists()
                    .col(pk_auto(License::Id))
                    .col(string_len_uniq(License::Key, 255))
                    .col(string_len(License::Detail, 2047))
                    .col(timestamp_with_time_zone(License::StartDate))
                    .col(timestamp_with_time_zone(License::EndDate))
                    .col(integer(License::ModuleId))
                    .col(integer_null(License::CustomerId))
                    .col(integer_null(License::LocationId))
                    .col(integer_null(License::ReplaceLicenseId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_license_module_id")
                            .from(License::Table, License::ModuleId)
                            .to(SoftwareModule::Table, SoftwareModule::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_license_customer_id")
                            .from(License::Table, License::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_license_location_id")
                            .from(License::Table, License::LocationId)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_license_replace_license_id")
                            .from(License::Table, License::ReplaceLicenseId)
                            .to(License::Table, License::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_license_end_date")
                    .table(License::Table)
                    .col(License::EndDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(License::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum License {
    Table,
    Id,
    Key,
    Detail,
    StartDate,
    EndDate,
    ModuleId,
    CustomerId,
    LocationId,
    ReplaceLicenseId,
}
