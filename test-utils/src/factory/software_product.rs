//! Software product factory.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test software products.
pub struct SoftwareProductFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::software_product::Model,
}

impl<'a> SoftwareProductFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::software_product::entity_builder()
            .name(format!("Produkt {}", id))
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.entity.version = version.into();
        self
    }

    pub fn adviser(mut self, adviser: Option<String>) -> Self {
        self.entity.adviser = adviser;
        self
    }

    /// Builds and inserts the product entity into the database.
    pub async fn build(self) -> Result<entity::software_product::Model, DbErr> {
        entity::software_product::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            category: ActiveValue::Set(self.entity.category),
            version: ActiveValue::Set(self.entity.version),
            adviser: ActiveValue::Set(self.entity.adviser),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a software product with default values.
pub async fn create_product(
    db: &DatabaseConnection,
) -> Result<entity::software_product::Model, DbErr> {
    SoftwareProductFactory::new(db).build().await
}
