use super::*;
use crate::server::{model::product::SaveModuleParams, service::software_module::SoftwareModuleService};

/// Tests creating and renaming a module.
///
/// Expected: Ok with the new name stored
#[tokio::test]
async fn creates_and_renames_module() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let product = factory::create_product(db).await?;
    let service = SoftwareModuleService::new(db);

    let module = service
        .create(SaveModuleParams {
            product_id: product.id,
            name: "Kasse".to_string(),
        })
        .await?;
    let renamed = service.update(module.id, "Kasse Pro".to_string()).await?;

    assert_eq!(renamed.product_id, product.id);
    assert_eq!(renamed.name, "Kasse Pro");

    Ok(())
}

/// Tests creating a module for a product that does not exist.
///
/// Expected: Err(ValidationErr)
#[tokio::test]
async fn rejects_unknown_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SoftwareModuleService::new(db)
        .create(SaveModuleParams {
            product_id: 999,
            name: "Kasse".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::ValidationErr(_))));

    Ok(())
}

/// Tests that deleting a module drops used products only once no license covers them.
///
/// Expected: Ok with the used product kept after the first and removed after the
/// second delete
#[tokio::test]
async fn delete_syncs_used_products() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let customer = factory::create_customer(db).await?;
    let location = factory::create_location(db, customer.id).await?;
    let product = factory::create_product(db).await?;
    let first = factory::create_module(db, product.id).await?;
    let second = factory::create_module(db, product.id).await?;
    factory::create_location_license(db, first.id, location.id).await?;
    factory::create_customer_license(db, second.id, customer.id).await?;
    factory::create_used_product(db, location.id, product.id).await?;
    let service = SoftwareModuleService::new(db);

    service.delete(first.id).await?;
    assert_eq!(entity::prelude::License::find().count(db).await?, 1);
    assert_eq!(entity::prelude::UsedSoftwareProduct::find().count(db).await?, 1);

    service.delete(second.id).await?;
    assert_eq!(entity::prelude::License::find().count(db).await?, 0);
    assert_eq!(entity::prelude::UsedSoftwareProduct::find().count(db).await?, 0);

    let result = service.delete(second.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
