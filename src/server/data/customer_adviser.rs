use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::person::PersonFields;

pub struct CustomerAdviserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerAdviserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all advisers ordered by last and first name.
    pub async fn get_all(&self) -> Result<Vec<entity::customer_adviser::Model>, DbErr> {
        entity::prelude::CustomerAdviser::find()
            .order_by_asc(entity::customer_adviser::Column::LastName)
            .order_by_asc(entity::customer_adviser::Column::FirstName)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::customer_adviser::Model>, DbErr> {
        entity::prelude::CustomerAdviser::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        person: PersonFields,
    ) -> Result<entity::customer_adviser::Model, DbErr> {
        entity::customer_adviser::ActiveModel {
            first_name: ActiveValue::Set(person.first_name),
            last_name: ActiveValue::Set(person.last_name),
            email_address: ActiveValue::Set(person.email_address),
            phone_number: ActiveValue::Set(person.phone_number),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        id: i32,
        person: PersonFields,
    ) -> Result<Option<entity::customer_adviser::Model>, DbErr> {
        let Some(adviser) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::customer_adviser::ActiveModel = adviser.into();
        active.first_name = ActiveValue::Set(person.first_name);
        active.last_name = ActiveValue::Set(person.last_name);
        active.email_address = ActiveValue::Set(person.email_address);
        active.phone_number = ActiveValue::Set(person.phone_number);

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes an adviser; their locations keep existing without adviser.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::CustomerAdviser::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
