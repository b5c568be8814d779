//! Location factory for creating test location entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test locations belonging to a customer.
pub struct LocationFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::location::Model,
}

impl<'a> LocationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, customer_id: i32) -> Self {
        let id = next_id();
        let entity = fixture::location::entity_builder()
            .customer_id(customer_id)
            .name(format!("Standort {}", id))
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn adviser_id(mut self, adviser_id: Option<i32>) -> Self {
        self.entity.adviser_id = adviser_id;
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.entity.city = city.into();
        self
    }

    /// Builds and inserts the location entity into the database.
    pub async fn build(self) -> Result<entity::location::Model, DbErr> {
        entity::location::ActiveModel {
            id: ActiveValue::NotSet,
            customer_id: ActiveValue::Set(self.entity.customer_id),
            adviser_id: ActiveValue::Set(self.entity.adviser_id),
            name: ActiveValue::Set(self.entity.name),
            email_address: ActiveValue::Set(self.entity.email_address),
            phone_number: ActiveValue::Set(self.entity.phone_number),
            street: ActiveValue::Set(self.entity.street),
            house_number: ActiveValue::Set(self.entity.house_number),
            postcode: ActiveValue::Set(self.entity.postcode),
            city: ActiveValue::Set(self.entity.city),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a location with default values for the given customer.
pub async fn create_location(
    db: &DatabaseConnection,
    customer_id: i32,
) -> Result<entity::location::Model, DbErr> {
    LocationFactory::new(db, customer_id).build().await
}
