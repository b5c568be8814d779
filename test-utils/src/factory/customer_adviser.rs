//! Customer adviser factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a customer adviser with unique default values.
pub async fn create_adviser(
    db: &DatabaseConnection,
) -> Result<entity::customer_adviser::Model, DbErr> {
    let id = next_id();
    entity::customer_adviser::ActiveModel {
        id: ActiveValue::NotSet,
        first_name: ActiveValue::Set("Berta".to_string()),
        last_name: ActiveValue::Set(format!("Berater {}", id)),
        email_address: ActiveValue::Set(format!("berater{}@example.com", id)),
        phone_number: ActiveValue::Set("0621 987654".to_string()),
    }
    .insert(db)
    .await
}
