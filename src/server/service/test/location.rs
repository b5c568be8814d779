use super::*;
use crate::server::{model::location::SaveLocationParams, service::location::LocationService};

fn params(customer_id: i32, name: &str) -> SaveLocationParams {
    SaveLocationParams {
        customer_id,
        adviser_id: None,
        name: name.to_string(),
        email_address: "filiale@example.com".to_string(),
        phone_number: "0621 555123".to_string(),
        street: "Hauptstraße".to_string(),
        house_number: "12a".to_string(),
        postcode: "68159".to_string(),
        city: "Mannheim".to_string(),
    }
}

/// Tests that a new location is covered by its customer's licenses.
///
/// Expected: Ok with a used product for the new location
#[tokio::test]
async fn create_adds_used_products_of_customer_licenses() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let customer = factory::create_customer(db).await?;
    let product = factory::create_product(db).await?;
    let module = factory::create_module(db, product.id).await?;
    factory::create_customer_license(db, module.id, customer.id).await?;

    let location = LocationService::new(db)
        .create(params(customer.id, "Filiale Nord"))
        .await?;

    let used = entity::prelude::UsedSoftwareProduct::find().all(db).await?;
    assert_eq!(used.len(), 1);
    assert_eq!(used[0].location_id, location.id);
    assert_eq!(used[0].product_id, product.id);

    Ok(())
}

/// Tests that moving a location to another customer drops the old customer's coverage.
///
/// Expected: Ok with the used product removed after the move and restored after
/// moving back
#[tokio::test]
async fn moving_location_resyncs_used_products() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let licensed = factory::create_customer(db).await?;
    let other = factory::create_customer(db).await?;
    let product = factory::create_product(db).await?;
    let module = factory::create_module(db, product.id).await?;
    factory::create_customer_license(db, module.id, licensed.id).await?;
    let service = LocationService::new(db);

    let location = service.create(params(licensed.id, "Lager")).await?;
    assert_eq!(entity::prelude::UsedSoftwareProduct::find().count(db).await?, 1);

    let moved = service
        .update(location.id, params(other.id, "Lager"))
        .await?;
    assert_eq!(moved.customer_id, other.id);
    assert_eq!(entity::prelude::UsedSoftwareProduct::find().count(db).await?, 0);

    service
        .update(location.id, params(licensed.id, "Lager"))
        .await?;
    assert_eq!(entity::prelude::UsedSoftwareProduct::find().count(db).await?, 1);

    Ok(())
}

/// Tests the house number and postcode limits and the customer reference.
///
/// Expected: Err(TooLong) for both fields, Err(UnknownReference) for a missing customer
#[tokio::test]
async fn rejects_invalid_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let customer = factory::create_customer(db).await?;
    let service = LocationService::new(db);

    let mut house_number = params(customer.id, "Filiale");
    house_number.house_number = "123456789".to_string();
    assert!(matches!(
        service.create(house_number).await,
        Err(AppError::ValidationErr(ValidationError::TooLong {
            field: "Hausnummer",
            max: 8
        }))
    ));

    let mut postcode = params(customer.id, "Filiale");
    postcode.postcode = "1".repeat(17);
    assert!(matches!(
        service.create(postcode).await,
        Err(AppError::ValidationErr(ValidationError::TooLong {
            field: "Postleitzahl",
            max: 16
        }))
    ));

    let mut accepted = params(customer.id, "Filiale");
    accepted.house_number = "12345678".to_string();
    accepted.postcode = "1".repeat(16);
    service.create(accepted).await?;

    assert!(matches!(
        service.create(params(999, "Filiale")).await,
        Err(AppError::ValidationErr(ValidationError::UnknownReference(
            "Kunde"
        )))
    ));

    Ok(())
}

/// Tests exact and substring name matching, including umlauts.
///
/// Expected: Ok with exact mode requiring the whole name
#[tokio::test]
async fn filters_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let customer = factory::customer::CustomerFactory::new(db)
        .name("Stadtwerke Münster")
        .build()
        .await?;
    factory::location::LocationFactory::new(db, customer.id)
        .name("Münster Süd")
        .build()
        .await?;
    factory::location::LocationFactory::new(db, customer.id)
        .name("Münster Nord")
        .build()
        .await?;
    let service = LocationService::new(db);

    let exact = service.filter_by_name("MÜNSTER SÜD", false).await?;
    assert_eq!(exact.len(), 1);
    assert_eq!(exact[0].location.name, "Münster Süd");
    assert_eq!(exact[0].customer_name, "Stadtwerke Münster");

    assert!(service.filter_by_name("münster", false).await?.is_empty());

    let names: Vec<String> = service
        .filter_by_name("münster", true)
        .await?
        .into_iter()
        .map(|m| m.location.name)
        .collect();
    assert_eq!(names, vec!["Münster Nord", "Münster Süd"]);

    Ok(())
}
