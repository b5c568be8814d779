use super::*;

/// Tests coverage by the location's own license.
///
/// Expected: Ok(1) for the licensed product, Ok(0) for another product
#[tokio::test]
async fn counts_location_license() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, location, product, _module, _license) =
        factory::helpers::create_license_with_dependencies(db).await?;
    let other_product = factory::create_product(db).await?;

    let repo = LicenseRepository::new(db);

    assert_eq!(
        repo.count_covering(location.id, customer.id, product.id)
            .await?,
        1
    );
    assert_eq!(
        repo.count_covering(location.id, customer.id, other_product.id)
            .await?,
        0
    );

    Ok(())
}

/// Tests coverage by a license of the whole customer.
///
/// Expected: Ok(1) for every location of the customer, Ok(0) for other customers
#[tokio::test]
async fn counts_customer_license_for_all_locations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let first = factory::create_location(db, customer.id).await?;
    let second = factory::create_location(db, customer.id).await?;
    let other_customer = factory::create_customer(db).await?;
    let foreign = factory::create_location(db, other_customer.id).await?;
    let product = factory::create_product(db).await?;
    let module = factory::create_module(db, product.id).await?;
    factory::create_customer_license(db, module.id, customer.id).await?;

    let repo = LicenseRepository::new(db);

    assert_eq!(repo.count_covering(first.id, customer.id, product.id).await?, 1);
    assert_eq!(repo.count_covering(second.id, customer.id, product.id).await?, 1);
    assert_eq!(
        repo.count_covering(foreign.id, other_customer.id, product.id)
            .await?,
        0
    );

    Ok(())
}
