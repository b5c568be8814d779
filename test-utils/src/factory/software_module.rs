//! Software module factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a module of the given product with a unique default name.
pub async fn create_module(
    db: &DatabaseConnection,
    product_id: i32,
) -> Result<entity::software_module::Model, DbErr> {
    entity::software_module::ActiveModel {
        id: ActiveValue::NotSet,
        product_id: ActiveValue::Set(product_id),
        name: ActiveValue::Set(format!("Modul {}", next_id())),
    }
    .insert(db)
    .await
}
