use super::*;

/// Tests listing releases of one product.
///
/// Expected: Ok with the product's releases, newest first
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::create_product(db).await?;
    let other_product = factory::create_product(db).await?;
    let now = Utc::now();
    factory::create_update(db, product.id, "1.0", now - Duration::days(30)).await?;
    factory::create_update(db, product.id, "1.1", now - Duration::days(1)).await?;
    factory::create_update(db, other_product.id, "9.0", now).await?;

    let updates = SoftwareUpdateRepository::new(db)
        .get_by_product(product.id)
        .await?;

    let versions: Vec<&str> = updates.iter().map(|u| u.version.as_str()).collect();
    assert_eq!(versions, vec!["1.1", "1.0"]);

    Ok(())
}
