//! Contact person factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a contact person at the given location without product assignments.
pub async fn create_contact_person(
    db: &DatabaseConnection,
    location_id: i32,
) -> Result<entity::contact_person::Model, DbErr> {
    let id = next_id();
    entity::contact_person::ActiveModel {
        id: ActiveValue::NotSet,
        location_id: ActiveValue::Set(location_id),
        first_name: ActiveValue::Set("Karl".to_string()),
        last_name: ActiveValue::Set(format!("Kontakt {}", id)),
        email_address: ActiveValue::Set(format!("kontakt{}@example.com", id)),
        phone_number: ActiveValue::Set("0621 555000".to_string()),
    }
    .insert(db)
    .await
}
