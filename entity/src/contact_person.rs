use sea_orm::entity::prelude::*;

/// Person at a customer location who is the point of contact for one or more products.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contact_person")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub location_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub phone_number: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::LocationId",
        to = "super::location::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Location,
    #[sea_orm(has_many = "super::contact_person_product::Entity")]
    ContactPersonProduct,
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<super::contact_person_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContactPersonProduct.def()
    }
}

impl Related<super::software_product::Entity> for Entity {
    fn to() -> RelationDef {
        super::contact_person_product::Relation::SoftwareProduct.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::contact_person_product::Relation::ContactPerson.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
