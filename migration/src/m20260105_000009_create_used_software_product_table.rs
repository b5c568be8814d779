use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000003_create_location_table::Location,
    m20260105_000005_create_software_product_table::SoftwareProduct,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UsedSoftwareProduct::Table)
                    .if_not_exists()
                    .col(pk_auto(UsedSoftwareProduct::Id))
                    .col(integer(UsedSoftwareProduct::LocationId))
                    .col(integer(UsedSoftwareProduct::ProductId))
                    .col(string_len(UsedSoftwareProduct::Version, 16))
                    .col(
                        timestamp_with_time_zone(UsedSoftwareProduct::LastUpdated)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_used_software_product_location_id")
                            .from(UsedSoftwareProduct::Table, UsedSoftwareProduct::LocationId)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_used_software_product_product_id")
                            .from(UsedSoftwareProduct::Table, UsedSoftwareProduct::ProductId)
                            .to(SoftwareProduct::Table, SoftwareProduct::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_used_software_product_location_product")
                    .table(UsedSoftwareProduct::Table)
                    .col(UsedSoftwareProduct::LocationId)
                    .col(UsedSoftwareProduct::ProductId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UsedSoftwareProduct::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UsedSoftwareProduct {
    Table,
    Id,
    LocationId,
    ProductId,
    Version,
    LastUpdated,
}
