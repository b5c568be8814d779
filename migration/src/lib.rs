pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_customer_table;
mod m20260105_000002_create_customer_adviser_table;
mod m20260105_000003_create_location_table;
mod m20260105_000004_create_contact_person_table;
mod m20260105_000005_create_software_product_table;
mod m20260105_000006_create_contact_person_product_table;
mod m20260105_000007_create_software_module_table;
mod m20260105_000008_create_license_table;
mod m20260105_000009_create_used_software_product_table;
mod m20260105_000010_create_heartbeat_table;
mod m20260105_000011_create_software_update_table;
mod m20260105_000012_create_user_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_customer_table::Migration),
            Box::new(m20260105_000002_create_customer_adviser_table::Migration),
            Box::new(m20260105_000003_create_location_table::Migration),
            Box::new(m20260105_000004_create_contact_person_table::Migration),
            Box::new(m20260105_000005_create_software_product_table::Migration),
            Box::new(m20260105_000006_create_contact_person_product_table::Migration),
            Box::new(m20260105_000007_create_software_module_table::Migration),
            Box::new(m20260105_000008_create_license_table::Migration),
            Box::new(m20260105_000009_create_used_software_product_table::Migration),
            Box::new(m20260105_000010_create_heartbeat_table::Migration),
            Box::new(m20260105_000011_create_software_update_table::Migration),
            Box::new(m20260105_000012_create_user_table::Migration),
        ]
    }
}
