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
                    .table(SoftwareModule::Table)
                    .if_not_exists()
                    .col(pk_auto(SoftwareModule::Id))
                    .col(integer(SoftwareModule::ProductId))
                    .col(string_len(SoftwareModule::Name, 127))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_software_module_product_id")
                            .from(SoftwareModule::Table, SoftwareModule::ProductId)
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
            .drop_table(Table::drop().table(SoftwareModule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SoftwareModule {
    Table,
    Id,
    ProductId,
    Name,
}
