use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "software_product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub category: String,
    /// Version of the latest release.
    pub version: String,
    pub adviser: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::software_module::Entity")]
    SoftwareModule,
    #[sea_orm(has_many = "super::used_software_product::Entity")]
    UsedSoftwareProduct,
    #[sea_orm(has_many = "super::software_update::Entity")]
    SoftwareUpdate,
    #[sea_orm(has_many = "super::contact_person_product::Entity")]
    ContactPersonProduct,
}

impl Related<super::software_module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SoftwareModule.def()
    }
}

impl Related<super::used_software_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UsedSoftwareProduct.def()
    }
}

impl Related<super::software_update::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SoftwareUpdate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
