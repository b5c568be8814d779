use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000004_create_contact_person_table::ContactPerson,
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
                    .table(ContactPersonProduct::Table)
                    .if_not_exists()
                    .col(integer(ContactPersonProduct::ContactPersonId))
                    .col(integer(ContactPersonProduct::ProductId))
                    .primary_key(
                        Index::create()
                            .col(ContactPersonProduct::ContactPersonId)
                            .col(ContactPersonProduct::ProductId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contact_person_product_contact_person_id")
                            .from(
                                ContactPersonProduct::Table,
                                ContactPersonProduct::ContactPersonId,
                            )
                            .to(ContactPerson::Table, ContactPerson::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contact_person_product_product_id")
                            .from(ContactPersonProduct::Table, ContactPersonProduct::ProductId)
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
            .drop_table(Table::drop().table(ContactPersonProduct::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ContactPersonProduct {
    Table,
    ContactPersonId,
    ProductId,
}
