use super::*;
use crate::server::{model::person::PersonFields, service::customer_adviser::CustomerAdviserService};

fn fields(email_address: &str) -> PersonFields {
    PersonFields {
        first_name: "Berta".to_string(),
        last_name: "Beispiel".to_string(),
        email_address: email_address.to_string(),
        phone_number: "0621 123456".to_string(),
    }
}

/// Tests creating and updating an adviser.
///
/// Expected: Ok with the changed address stored
#[tokio::test]
async fn creates_and_updates_adviser() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = CustomerAdviserService::new(db);

    let adviser = service.create(fields("berta@example.com")).await?;
    let updated = service
        .update(adviser.id, fields("b.beispiel@example.com"))
        .await?;

    assert_eq!(updated.id, adviser.id);
    assert_eq!(updated.person.email_address, "b.beispiel@example.com");
    assert_eq!(service.list().await?.len(), 1);

    Ok(())
}

/// Tests that an invalid e-mail address is rejected.
///
/// Expected: Err(ValidationErr(InvalidEmail))
#[tokio::test]
async fn rejects_invalid_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CustomerAdviserService::new(db)
        .create(fields("keine-adresse"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::InvalidEmail))
    ));

    Ok(())
}

/// Tests that deleting an adviser keeps their locations.
///
/// Expected: Ok with the location's adviser cleared
#[tokio::test]
async fn delete_keeps_locations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let adviser = factory::create_adviser(db).await?;
    let customer = factory::create_customer(db).await?;
    let location = factory::location::LocationFactory::new(db, customer.id)
        .adviser_id(Some(adviser.id))
        .build()
        .await?;

    CustomerAdviserService::new(db).delete(adviser.id).await?;

    let location = entity::prelude::Location::find_by_id(location.id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("location".to_string()))?;
    assert_eq!(location.adviser_id, None);

    let result = CustomerAdviserService::new(db).delete(adviser.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
