use super::*;

/// Tests restricting used products to a product and a set of locations.
///
/// Expected: Ok with only the used product at one of the given locations
#[tokio::test]
async fn filters_by_product_and_locations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, location, product, used) =
        factory::helpers::create_used_product_with_dependencies(db).await?;
    let other_location = factory::create_location(db, customer.id).await?;
    factory::create_used_product(db, other_location.id, product.id).await?;
    let other_product = factory::create_product(db).await?;
    factory::create_used_product(db, location.id, other_product.id).await?;

    let result = UsedSoftwareProductRepository::new(db)
        .get_for_product_at(product.id, vec![location.id])
        .await?;

    assert_eq!(result, vec![used]);

    Ok(())
}
