use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "software_module")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_id: i32,
    pub name: String,
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
    #[sea_orm(has_many = "super::license::Entity")]
    License,
}

impl Related<super::software_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SoftwareProduct.def()
    }
}

impl Related<super::license::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::License.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
