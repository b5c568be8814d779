//! Used software product factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating used software products.
///
/// The installed version defaults to `fixture::software_product::DEFAULT_VERSION`, which
/// matches products created by the default product factory.
pub struct UsedSoftwareProductFactory<'a> {
    db: &'a DatabaseConnection,
    location_id: i32,
    product_id: i32,
    version: String,
    last_updated: DateTime<Utc>,
}

impl<'a> UsedSoftwareProductFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, location_id: i32, product_id: i32) -> Self {
        Self {
            db,
            location_id,
            product_id,
            version: crate::fixture::software_product::DEFAULT_VERSION.to_string(),
            last_updated: Utc::now(),
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn last_updated(mut self, last_updated: DateTime<Utc>) -> Self {
        self.last_updated = last_updated;
        self
    }

    pub async fn build(self) -> Result<entity::used_software_product::Model, DbErr> {
        entity::used_software_product::ActiveModel {
            id: ActiveValue::NotSet,
            location_id: ActiveValue::Set(self.location_id),
            product_id: ActiveValue::Set(self.product_id),
            version: ActiveValue::Set(self.version),
            last_updated: ActiveValue::Set(self.last_updated),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a used software product with default values.
pub async fn create_used_product(
    db: &DatabaseConnection,
    location_id: i32,
    product_id: i32,
) -> Result<entity::used_software_product::Model, DbErr> {
    UsedSoftwareProductFactory::new(db, location_id, product_id)
        .build()
        .await
}
