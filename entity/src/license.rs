use sea_orm::entity::prelude::*;

/// Permission to use a software module, owned either by a whole customer or by
/// a single location.
///
/// Exactly one of `customer_id` and `location_id` is set. `replace_license_id`
/// points at the future license that takes over once this one runs out.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "license")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub key: String,
    pub detail: String,
    pub start_date: DateTimeUtc,
    pub end_date: DateTimeUtc,
    pub module_id: i32,
    pub customer_id: Option<i32>,
    pub location_id: Option<i32>,
    pub replace_license_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::software_module::Entity",
        from = "Column::ModuleId",
        to = "super::software_module::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    SoftwareModule,
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Customer,
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::LocationId",
        to = "super::location::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Location,
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ReplaceLicenseId",
        to = "Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    ReplaceLicense,
}

impl Related<super::software_module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SoftwareModule.def()
    }
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
