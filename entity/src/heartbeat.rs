use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "heartbeat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub used_product_id: i32,
    pub last_received: DateTimeUtc,
    pub message: String,
    pub detail: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::used_software_product::Entity",
        from = "Column::UsedProductId",
        to = "super::used_software_product::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    UsedSoftwareProduct,
}

impl Related<super::used_software_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UsedSoftwareProduct.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
