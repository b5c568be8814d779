use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::{data::matches_word, model::customer::SaveCustomerParams};

pub struct CustomerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: SaveCustomerParams,
    ) -> Result<entity::customer::Model, DbErr> {
        entity::customer::ActiveModel {
            customer_number: ActiveValue::Set(params.customer_number),
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Updates number and name. Returns `None` if the customer does not exist.
    pub async fn update(
        &self,
        id: i32,
        params: SaveCustomerParams,
    ) -> Result<Option<entity::customer::Model>, DbErr> {
        let Some(customer) = entity::prelude::Customer::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::customer::ActiveModel = customer.into();
        active.customer_number = ActiveValue::Set(params.customer_number);
        active.name = ActiveValue::Set(params.name);

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::customer::Model>, DbErr> {
        entity::prelude::Customer::find_by_id(id).one(self.db).await
    }

    /// Gets a page of customers ordered by name, each with its number of locations.
    ///
    /// # Returns
    /// - `Ok((customers, total))` - Customers of the page with location counts, and the
    ///   total number of customers
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<(entity::customer::Model, u64)>, u64), DbErr> {
        let paginator = entity::prelude::Customer::find()
            .order_by_asc(entity::customer::Column::Name)
            .order_by_asc(entity::customer::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let customers = paginator.fetch_page(page).await?;

        let customer_ids: Vec<i32> = customers.iter().map(|c| c.id).collect();
        let mut location_counts: HashMap<i32, u64> = HashMap::new();
        if !customer_ids.is_empty() {
            for location in entity::prelude::Location::find()
                .filter(entity::location::Column::CustomerId.is_in(customer_ids))
                .all(self.db)
                .await?
            {
                *location_counts.entry(location.customer_id).or_default() += 1;
            }
        }

        let customers = customers
            .into_iter()
            .map(|c| {
                let count = location_counts.get(&c.id).copied().unwrap_or(0);
                (c, count)
            })
            .collect();

        Ok((customers, total))
    }

    /// Checks whether another customer already uses `customer_number`.
    pub async fn number_taken(
        &self,
        customer_number: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Customer::find()
            .filter(entity::customer::Column::CustomerNumber.eq(customer_number));

        if let Some(id) = exclude_id {
            query = query.filter(entity::customer::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Deletes a customer; locations, licenses and everything below cascade.
    ///
    /// Returns whether a row was deleted.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Customer::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Finds customers whose number or name matches `word`, ordered by name.
    ///
    /// Matching ignores case. With `contains` the word may appear anywhere, otherwise
    /// the whole number or name must equal it. Each customer appears once.
    pub async fn filter(
        &self,
        word: &str,
        contains: bool,
    ) -> Result<Vec<entity::customer::Model>, DbErr> {
        let customers = entity::prelude::Customer::find()
            .order_by_asc(entity::customer::Column::Name)
            .order_by_asc(entity::customer::Column::Id)
            .all(self.db)
            .await?;

        let word = word.to_lowercase();
        Ok(customers
            .into_iter()
            .filter(|c| {
                matches_word(&c.customer_number, &word, contains)
                    || matches_word(&c.name, &word, contains)
            })
            .collect())
    }
}
