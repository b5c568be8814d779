use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::update::CreateUpdateParams;

pub struct SoftwareUpdateRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SoftwareUpdateRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateUpdateParams,
        release_date: DateTime<Utc>,
    ) -> Result<entity::software_update::Model, DbErr> {
        entity::software_update::ActiveModel {
            product_id: ActiveValue::Set(params.product_id),
            version: ActiveValue::Set(params.version),
            release_date: ActiveValue::Set(release_date),
            content: ActiveValue::Set(params.content),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::software_update::Model>, DbErr> {
        entity::prelude::SoftwareUpdate::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets all releases of a product, newest first.
    pub async fn get_by_product(
        &self,
        product_id: i32,
    ) -> Result<Vec<entity::software_update::Model>, DbErr> {
        entity::prelude::SoftwareUpdate::find()
            .filter(entity::software_update::Column::ProductId.eq(product_id))
            .order_by_desc(entity::software_update::Column::ReleaseDate)
            .order_by_desc(entity::software_update::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the newest release date of each given product.
    pub async fn get_latest_release_dates(
        &self,
        product_ids: &[i32],
    ) -> Result<HashMap<i32, DateTime<Utc>>, DbErr> {
        let mut latest = HashMap::new();

        for product_id in product_ids {
            let newest = entity::prelude::SoftwareUpdate::find()
                .filter(entity::software_update::Column::ProductId.eq(*product_id))
                .order_by_desc(entity::software_update::Column::ReleaseDate)
                .one(self.db)
                .await?;

            if let Some(update) = newest {
                latest.insert(*product_id, update.release_date);
            }
        }

        Ok(latest)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::SoftwareUpdate::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
