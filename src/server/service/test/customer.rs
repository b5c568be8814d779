use super::*;
use crate::server::{model::customer::SaveCustomerParams, service::customer::CustomerService};

fn params(customer_number: &str, name: &str) -> SaveCustomerParams {
    SaveCustomerParams {
        customer_number: customer_number.to_string(),
        name: name.to_string(),
    }
}

/// Tests creating a customer with valid fields.
///
/// Expected: Ok with customer stored
#[tokio::test]
async fn creates_customer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = CustomerService::new(db)
        .create(params("K-4711", "Bäckerei Schmitt"))
        .await?;

    assert_eq!(customer.customer_number, "K-4711");
    assert_eq!(customer.name, "Bäckerei Schmitt");
    assert!(entity::prelude::Customer::find_by_id(customer.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests the validation messages for empty and overlong fields.
///
/// Expected: Err(ValidationErr) naming the offending field
#[tokio::test]
async fn rejects_invalid_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = CustomerService::new(db);

    let result = service.create(params("", "Name")).await;
    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::Required("Kundennummer")))
    ));

    let result = service.create(params(&"1".repeat(33), "Name")).await;
    let err = result.unwrap_err().to_string();
    assert_eq!(err, "Kundennummer darf maximal 32 Zeichen lang sein.");

    let result = service.create(params("K-1", &"n".repeat(65))).await;
    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::TooLong {
            field: "Name",
            max: 64
        }))
    ));

    Ok(())
}

/// Tests that a customer number can only be used once.
///
/// Updating a customer with its own number stays allowed.
///
/// Expected: Err(Taken) for a second customer, Ok for the update
#[tokio::test]
async fn rejects_duplicate_customer_number() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = CustomerService::new(db);

    let existing = service.create(params("K-1000", "Erster Kunde")).await?;

    let result = service.create(params("K-1000", "Zweiter Kunde")).await;
    assert_eq!(
        result.unwrap_err().to_string(),
        "Diese Kundennummer ist bereits vergeben."
    );

    let updated = service
        .update(existing.id, params("K-1000", "Umbenannt"))
        .await?;
    assert_eq!(updated.name, "Umbenannt");

    Ok(())
}

/// Tests deleting a customer removes its locations, licenses and used products.
///
/// Expected: Ok with dependent rows gone
#[tokio::test]
async fn delete_cascades_to_dependents() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, location, product, _module, _license) =
        factory::helpers::create_license_with_dependencies(db).await?;
    factory::create_used_product(db, location.id, product.id).await?;

    CustomerService::new(db).delete(customer.id).await?;

    assert_eq!(entity::prelude::Location::find().count(db).await?, 0);
    assert_eq!(entity::prelude::License::find().count(db).await?, 0);
    assert_eq!(
        entity::prelude::UsedSoftwareProduct::find().count(db).await?,
        0
    );
    assert_eq!(entity::prelude::SoftwareProduct::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting an unknown customer.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn delete_unknown_customer_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CustomerService::new(db).delete(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the paginated listing with location counts.
///
/// Expected: Ok with customers ordered by name and counted locations
#[tokio::test]
async fn lists_customers_with_location_count() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let zeta = factory::customer::CustomerFactory::new(db)
        .name("Zeta AG")
        .build()
        .await?;
    factory::customer::CustomerFactory::new(db)
        .name("Alpha KG")
        .build()
        .await?;
    factory::create_location(db, zeta.id).await?;
    factory::create_location(db, zeta.id).await?;

    let page = CustomerService::new(db).list(0, 10).await?;

    assert_eq!(page.total, 2);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.customers[0].customer.name, "Alpha KG");
    assert_eq!(page.customers[0].location_count, 0);
    assert_eq!(page.customers[1].customer.name, "Zeta AG");
    assert_eq!(page.customers[1].location_count, 2);

    Ok(())
}
