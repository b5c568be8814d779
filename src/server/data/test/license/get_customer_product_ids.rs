use super::*;

/// Tests collecting products licensed to a whole customer.
///
/// Location licenses are ignored and duplicates collapse.
///
/// Expected: Ok with each customer-licensed product once
#[tokio::test]
async fn returns_distinct_customer_products() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _location, location_product, _module, _license) =
        factory::helpers::create_license_with_dependencies(db).await?;
    let product = factory::create_product(db).await?;
    let first_module = factory::create_module(db, product.id).await?;
    let second_module = factory::create_module(db, product.id).await?;
    factory::create_customer_license(db, first_module.id, customer.id).await?;
    factory::create_customer_license(db, second_module.id, customer.id).await?;

    let product_ids = LicenseRepository::new(db)
        .get_customer_product_ids(customer.id)
        .await?;

    assert_eq!(product_ids, vec![product.id]);
    assert!(!product_ids.contains(&location_product.id));

    Ok(())
}
