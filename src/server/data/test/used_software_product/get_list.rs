use super::*;

/// Tests joining product and location onto each used product.
///
/// Expected: Ok with relations attached in insertion order
#[tokio::test]
async fn returns_used_products_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, location, product, used) =
        factory::helpers::create_used_product_with_dependencies(db).await?;
    let second_location = factory::create_location(db, customer.id).await?;
    let second = factory::create_used_product(db, second_location.id, product.id).await?;

    let rows = UsedSoftwareProductRepository::new(db).get_list(None).await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].used_product.id, used.id);
    assert_eq!(rows[0].location.id, location.id);
    assert_eq!(rows[0].product.id, product.id);
    assert_eq!(rows[1].used_product.id, second.id);
    assert_eq!(rows[1].location.id, second_location.id);

    let limited = UsedSoftwareProductRepository::new(db)
        .get_list(Some(1))
        .await?;
    assert_eq!(limited.len(), 1);

    Ok(())
}
