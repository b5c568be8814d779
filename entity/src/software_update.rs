use sea_orm::entity::prelude::*;

/// Released version of a software product together with its installer payload.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "software_update")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_id: i32,
    pub version: String,
    pub release_date: DateTimeUtc,
    pub content: Vec<u8>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::software_product::Entity",
        from = "Column::ProductId",
        to = "super::software_product::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    SoftwareProduct,
}

impl Related<super::software_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SoftwareProduct.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
