//! Customer factory for creating test customer entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test customers with customizable fields.
///
/// Defaults come from `fixture::customer` with a unique customer number so that
/// several customers can be created in one test.
pub struct CustomerFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::customer::Model,
}

impl<'a> CustomerFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::customer::entity_builder()
            .customer_number(format!("K-{:06}", id))
            .name(format!("Kunde {}", id))
            .build();

        Self { db, entity }
    }

    pub fn customer_number(mut self, customer_number: impl Into<String>) -> Self {
        self.entity.customer_number = customer_number.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Builds and inserts the customer entity into the database.
    pub async fn build(self) -> Result<entity::customer::Model, DbErr> {
        entity::customer::ActiveModel {
            id: ActiveValue::NotSet,
            customer_number: ActiveValue::Set(self.entity.customer_number),
            name: ActiveValue::Set(self.entity.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a customer with default values.
pub async fn create_customer(db: &DatabaseConnection) -> Result<entity::customer::Model, DbErr> {
    CustomerFactory::new(db).build().await
}
