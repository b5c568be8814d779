use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000009_create_used_software_product_table::UsedSoftwareProduct;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Heartbeat::Table)
                    .if_not_exists()
                    .col(pk_auto(Heartbeat::Id))
                    .col(integer(Heartbeat::UsedProductId))
                    .col(timestamp_with_time_zone(Heartbeat::LastReceived))
                    .col(string_len(Heartbeat::Message, 2047))
                    .col(string_len(Heartbeat::Detail, 2047))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_heartbeat_used_product_id")
                            .from(Heartbeat::Table, Heartbeat::UsedProductId)
                            .to(UsedSoftwareProduct::Table, UsedSoftwareProduct::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_heartbeat_used_product_last_received")
                    .table(Heartbeat::Table)
                    .col(Heartbeat::UsedProductId)
                    .col(Heartbeat::LastReceived)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Heartbeat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Heartbeat {
    Table,
    Id,
    UsedProductId,
    LastReceived,
    Message,
    Detail,
}
