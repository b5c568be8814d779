//! License factory for creating test license entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;
use crate::fixture;

/// Factory for creating test licenses.
///
/// Starts from `fixture::license` with a unique key. The owner defaults to the
/// fixture's location and should be set with `location()` or `customer()`.
pub struct LicenseFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::license::Model,
}

impl<'a> LicenseFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, module_id: i32) -> Self {
        let entity = fixture::license::entity_builder()
            .module_id(module_id)
            .key(format!("LIC-{:08}", next_id()))
            .build();

        Self { db, entity }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.entity.key = key.into();
        self
    }

    pub fn location(mut self, location_id: i32) -> Self {
        self.entity.location_id = Some(location_id);
        self.entity.customer_id = None;
        self
    }

    pub fn customer(mut self, customer_id: i32) -> Self {
        self.entity.customer_id = Some(customer_id);
        self.entity.location_id = None;
        self
    }

    pub fn start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.entity.start_date = start_date;
        self
    }

    pub fn end_date(mut self, end_date: DateTime<Utc>) -> Self {
        self.entity.end_date = end_date;
        self
    }

    pub fn replace_license_id(mut self, replace_license_id: Option<i32>) -> Self {
        self.entity.replace_license_id = replace_license_id;
        self
    }

    /// Builds and inserts the license entity into the database.
    pub async fn build(self) -> Result<entity::license::Model, DbErr> {
        entity::license::ActiveModel {
            id: ActiveValue::NotSet,
            key: ActiveValue::Set(self.entity.key),
            detail: ActiveValue::Set(self.entity.detail),
            start_date: ActiveValue::Set(self.entity.start_date),
            end_date: ActiveValue::Set(self.entity.end_date),
            module_id: ActiveValue::Set(self.entity.module_id),
            customer_id: ActiveValue::Set(self.entity.customer_id),
            location_id: ActiveValue::Set(self.entity.location_id),
            replace_license_id: ActiveValue::Set(self.entity.replace_license_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a license for `module_id` owned by a single location.
pub async fn create_location_license(
    db: &DatabaseConnection,
    module_id: i32,
    location_id: i32,
) -> Result<entity::license::Model, DbErr> {
    LicenseFactory::new(db, module_id)
        .location(location_id)
        .build()
        .await
}

/// Creates a license for `module_id` valid for every location of a customer.
pub async fn create_customer_license(
    db: &DatabaseConnection,
    module_id: i32,
    customer_id: i32,
) -> Result<entity::license::Model, DbErr> {
    LicenseFactory::new(db, module_id)
        .customer(customer_id)
        .build()
        .await
}
