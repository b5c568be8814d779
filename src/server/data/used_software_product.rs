use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::heartbeat::UsedProductWithRelations;

pub struct UsedSoftwareProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UsedSoftwareProductRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a used product with an unknown (empty) version.
    pub async fn create(
        &self,
        location_id: i32,
        product_id: i32,
    ) -> Result<entity::used_software_product::Model, DbErr> {
        entity::used_software_product::ActiveModel {
            location_id: ActiveValue::Set(location_id),
            product_id: ActiveValue::Set(product_id),
            version: ActiveValue::Set(String::new()),
            last_updated: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::used_software_product::Model>, DbErr> {
        entity::prelude::UsedSoftwareProduct::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn get(
        &self,
        location_id: i32,
        product_id: i32,
    ) -> Result<Option<entity::used_software_product::Model>, DbErr> {
        entity::prelude::UsedSoftwareProduct::find()
            .filter(entity::used_software_product::Column::LocationId.eq(location_id))
            .filter(entity::used_software_product::Column::ProductId.eq(product_id))
            .one(self.db)
            .await
    }

    /// Gets the used products of `product_id` at any of `location_ids`.
    pub async fn get_for_product_at(
        &self,
        product_id: i32,
        location_ids: Vec<i32>,
    ) -> Result<Vec<entity::used_software_product::Model>, DbErr> {
        entity::prelude::UsedSoftwareProduct::find()
            .filter(entity::used_software_product::Column::ProductId.eq(product_id))
            .filter(entity::used_software_product::Column::LocationId.is_in(location_ids))
            .all(self.db)
            .await
    }

    /// Sets the installed version and stamps `last_updated`.
    pub async fn set_version(
        &self,
        id: i32,
        version: &str,
        now: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::UsedSoftwareProduct::update_many()
            .col_expr(
                entity::used_software_product::Column::Version,
                Expr::value(version.to_string()),
            )
            .col_expr(
                entity::used_software_product::Column::LastUpdated,
                Expr::value(now),
            )
            .filter(entity::used_software_product::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a used product and, by cascade, its heartbeats.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::UsedSoftwareProduct::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets used products with their product and location, up to `limit` if given.
    pub async fn get_list(
        &self,
        limit: Option<u64>,
    ) -> Result<Vec<UsedProductWithRelations>, DbErr> {
        let used_products = entity::prelude::UsedSoftwareProduct::find()
            .order_by_asc(entity::used_software_product::Column::Id)
            .limit(limit)
            .find_also_related(entity::prelude::SoftwareProduct)
            .all(self.db)
            .await?;

        let location_ids: Vec<i32> = used_products
            .iter()
            .map(|(used, _)| used.location_id)
            .collect();
        let locations: HashMap<i32, entity::location::Model> = entity::prelude::Location::find()
            .filter(entity::location::Column::Id.is_in(location_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|l| (l.id, l))
            .collect();

        Ok(used_products
            .into_iter()
            .filter_map(|(used, product)| {
                let product = product?;
                let location = locations.get(&used.location_id).cloned()?;
                Some(UsedProductWithRelations {
                    used_product: used,
                    product,
                    location,
                })
            })
            .collect())
    }
}
