//! Heartbeat factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for heartbeats of a used software product.
pub struct HeartbeatFactory<'a> {
    db: &'a DatabaseConnection,
    used_product_id: i32,
    last_received: DateTime<Utc>,
    message: String,
    detail: String,
}

impl<'a> HeartbeatFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, used_product_id: i32) -> Self {
        Self {
            db,
            used_product_id,
            last_received: Utc::now(),
            message: "12:00 01.01.2026 [INFO] Dienst gestartet".to_string(),
            detail: String::new(),
        }
    }

    pub fn last_received(mut self, last_received: DateTime<Utc>) -> Self {
        self.last_received = last_received;
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub async fn build(self) -> Result<entity::heartbeat::Model, DbErr> {
        entity::heartbeat::ActiveModel {
            id: ActiveValue::NotSet,
            used_product_id: ActiveValue::Set(self.used_product_id),
            last_received: ActiveValue::Set(self.last_received),
            message: ActiveValue::Set(self.message),
            detail: ActiveValue::Set(self.detail),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a heartbeat received now.
pub async fn create_heartbeat(
    db: &DatabaseConnection,
    used_product_id: i32,
) -> Result<entity::heartbeat::Model, DbErr> {
    HeartbeatFactory::new(db, used_product_id).build().await
}
