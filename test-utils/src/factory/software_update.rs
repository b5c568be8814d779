//! Software update factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an update release for a product with a small placeholder payload.
pub async fn create_update(
    db: &DatabaseConnection,
    product_id: i32,
    version: impl Into<String>,
    release_date: DateTime<Utc>,
) -> Result<entity::software_update::Model, DbErr> {
    entity::software_update::ActiveModel {
        id: ActiveValue::NotSet,
        product_id: ActiveValue::Set(product_id),
        version: ActiveValue::Set(version.into()),
        release_date: ActiveValue::Set(release_date),
        content: ActiveValue::Set(vec![0x50, 0x4b, 0x03, 0x04]),
    }
    .insert(db)
    .await
}
