use sea_orm::entity::prelude::*;

/// A software product deployed at a location, with the version it reports.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "used_software_product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub location_id: i32,
    pub product_id: i32,
    /// Installed version; empty until a client reports one.
    pub version: String,
    pub last_updated: DateTimeUtc,
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
    #[sea_orm(
        belongs_to = "super::software_product::Entity",
        from = "Column::ProductId",
        to = "super::software_product::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    SoftwareProduct,
    #[sea_orm(has_many = "super::heartbeat::Entity")]
    Heartbeat,
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<super::software_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SoftwareProduct.def()
    }
}

impl Related<super::heartbeat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Heartbeat.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
