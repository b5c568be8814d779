use sea_orm::DatabaseConnection;

use crate::server::{
    data::customer_adviser::CustomerAdviserRepository,
    error::AppError,
    model::person::{Adviser, PersonFields},
    util::validate,
};

pub struct CustomerAdviserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerAdviserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Adviser>, AppError> {
        let advisers = CustomerAdviserRepository::new(self.db).get_all().await?;

        Ok(advisers.into_iter().map(Adviser::from_entity).collect())
    }

    pub async fn create(&self, person: PersonFields) -> Result<Adviser, AppError> {
        validate::person(&person)?;

        let adviser = CustomerAdviserRepository::new(self.db).create(person).await?;

        Ok(Adviser::from_entity(adviser))
    }

    pub async fn update(&self, id: i32, person: PersonFields) -> Result<Adviser, AppError> {
        validate::person(&person)?;

        let adviser = CustomerAdviserRepository::new(self.db)
            .update(id, person)
            .await?
            .ok_or_else(|| AppError::NotFound("Kundenberater nicht gefunden.".to_string()))?;

        Ok(Adviser::from_entity(adviser))
    }

    /// Deletes an adviser. Their locations are kept without adviser.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CustomerAdviserRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(
                "Kundenberater nicht gefunden.".to_string(),
            ));
        }

        Ok(())
    }
}
