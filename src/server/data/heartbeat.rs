use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

pub struct HeartbeatRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HeartbeatRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        used_product_id: i32,
        message: String,
        detail: String,
        received: DateTime<Utc>,
    ) -> Result<entity::heartbeat::Model, DbErr> {
        entity::heartbeat::ActiveModel {
            used_product_id: ActiveValue::Set(used_product_id),
            last_received: ActiveValue::Set(received),
            message: ActiveValue::Set(message),
            detail: ActiveValue::Set(detail),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets the newest heartbeat timestamp of each given used product.
    ///
    /// Used products without any heartbeat are absent from the map.
    pub async fn get_latest_received(
        &self,
        used_product_ids: &[i32],
    ) -> Result<HashMap<i32, DateTime<Utc>>, DbErr> {
        let mut latest = HashMap::new();

        for used_product_id in used_product_ids {
            let newest = entity::prelude::Heartbeat::find()
                .filter(entity::heartbeat::Column::UsedProductId.eq(*used_product_id))
                .order_by_desc(entity::heartbeat::Column::LastReceived)
                .one(self.db)
                .await?;

            if let Some(heartbeat) = newest {
                latest.insert(*used_product_id, heartbeat.last_received);
            }
        }

        Ok(latest)
    }

    /// Gets a page of heartbeats of one used product, newest first.
    pub async fn get_paginated_by_used_product(
        &self,
        used_product_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::heartbeat::Model>, u64), DbErr> {
        let paginator = entity::prelude::Heartbeat::find()
            .filter(entity::heartbeat::Column::UsedProductId.eq(used_product_id))
            .order_by_desc(entity::heartbeat::Column::LastReceived)
            .order_by_desc(entity::heartbeat::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let heartbeats = paginator.fetch_page(page).await?;

        Ok((heartbeats, total))
    }
}
