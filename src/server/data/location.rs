use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{data::matches_word, model::location::SaveLocationParams};

pub struct LocationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LocationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: SaveLocationParams,
    ) -> Result<entity::location::Model, DbErr> {
        entity::location::ActiveModel {
            customer_id: ActiveValue::Set(params.customer_id),
            adviser_id: ActiveValue::Set(params.adviser_id),
            name: ActiveValue::Set(params.name),
            email_address: ActiveValue::Set(params.email_address),
            phone_number: ActiveValue::Set(params.phone_number),
            street: ActiveValue::Set(params.street),
            house_number: ActiveValue::Set(params.house_number),
            postcode: ActiveValue::Set(params.postcode),
            city: ActiveValue::Set(params.city),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Updates all fields. Returns `None` if the location does not exist.
    pub async fn update(
        &self,
        id: i32,
        params: SaveLocationParams,
    ) -> Result<Option<entity::location::Model>, DbErr> {
        let Some(location) = entity::prelude::Location::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::location::ActiveModel = location.into();
        active.customer_id = ActiveValue::Set(params.customer_id);
        active.adviser_id = ActiveValue::Set(params.adviser_id);
        active.name = ActiveValue::Set(params.name);
        active.email_address = ActiveValue::Set(params.email_address);
        active.phone_number = ActiveValue::Set(params.phone_number);
        active.street = ActiveValue::Set(params.street);
        active.house_number = ActiveValue::Set(params.house_number);
        active.postcode = ActiveValue::Set(params.postcode);
        active.city = ActiveValue::Set(params.city);

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::location::Model>, DbErr> {
        entity::prelude::Location::find_by_id(id).one(self.db).await
    }

    /// Gets all locations of a customer ordered by name.
    pub async fn get_by_customer(
        &self,
        customer_id: i32,
    ) -> Result<Vec<entity::location::Model>, DbErr> {
        entity::prelude::Location::find()
            .filter(entity::location::Column::CustomerId.eq(customer_id))
            .order_by_asc(entity::location::Column::Name)
            .order_by_asc(entity::location::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Location::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Finds locations by name together with their customer, ordered by name.
    ///
    /// Same matching rules as `CustomerRepository::filter`.
    pub async fn filter_by_name(
        &self,
        word: &str,
        contains: bool,
    ) -> Result<Vec<(entity::location::Model, Option<entity::customer::Model>)>, DbErr> {
        let locations = entity::prelude::Location::find()
            .find_also_related(entity::prelude::Customer)
            .order_by_asc(entity::location::Column::Name)
            .order_by_asc(entity::location::Column::Id)
            .all(self.db)
            .await?;

        let word = word.to_lowercase();
        Ok(locations
            .into_iter()
            .filter(|(location, _)| matches_word(&location.name, &word, contains))
            .collect())
    }
}
