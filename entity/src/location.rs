use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "location")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub customer_id: i32,
    pub adviser_id: Option<i32>,
    pub name: String,
    pub email_address: String,
    pub phone_number: String,
    pub street: String,
    pub house_number: String,
    pub postcode: String,
    pub city: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Customer,
    #[sea_orm(
        belongs_to = "super::customer_adviser::Entity",
        from = "Column::AdviserId",
        to = "super::customer_adviser::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    CustomerAdviser,
    #[sea_orm(has_many = "super::contact_person::Entity")]
    ContactPerson,
    #[sea_orm(has_many = "super::license::Entity")]
    License,
    #[sea_orm(has_many = "super::used_software_product::Entity")]
    UsedSoftwareProduct,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::customer_adviser::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomerAdviser.def()
    }
}

impl Related<super::contact_person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContactPerson.def()
    }
}

impl Related<super::license::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::License.def()
    }
}

impl Related<super::used_software_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UsedSoftwareProduct.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
