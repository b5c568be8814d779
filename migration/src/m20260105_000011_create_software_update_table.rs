use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000005_create_software_product_table::SoftwareProduct;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SoftwareUpdate::Table)
                    .if_not_exists()
                    .col(pk_auto(SoftwareUpdate::Id))
                    .col(integer(SoftwareUpdate::ProductId))
                    .col(string_len(SoftwareUpdate::Version, 16))
                    .col(
                        timestamp_with_time_zone(SoftwareUpdate::ReleaseDate)
                            .default(Expr::current_timestamp()),
                    )
                    .col(blob(SoftwareUpdate::Content))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_software_update_product_id")
                            .from(SoftwareUpdate::Table, SoftwareUpdate::ProductId)
                            .to(SoftwareProduct::Table, SoftwareProduct::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SoftwareUpdate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SoftwareUpdate {
    Table,
    Id,
    ProductId,
    Version,
    ReleaseDate,
    Content,
}
