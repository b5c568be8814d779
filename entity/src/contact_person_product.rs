use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contact_person_product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub contact_person_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::contact_person::Entity",
        from = "Column::ContactPersonId",
        to = "super::contact_person::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ContactPerson,
    #[sea_orm(
        belongs_to = "super::software_product::Entity",
        from = "Column::ProductId",
        to = "super::software_product::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    SoftwareProduct,
}

impl Related<super::contact_person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContactPerson.def()
    }
}

impl Related<super::software_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SoftwareProduct.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
