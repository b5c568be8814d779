use super::*;

/// Tests the newest release date per product.
///
/// Expected: Ok with an entry only for products that have releases
#[tokio::test]
async fn returns_latest_date_per_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::create_product(db).await?;
    let unreleased = factory::create_product(db).await?;
    let now = Utc::now();
    factory::create_update(db, product.id, "1.0", now - Duration::days(30)).await?;
    let newest = factory::create_update(db, product.id, "1.1", now - Duration::days(2)).await?;

    let latest = SoftwareUpdateRepository::new(db)
        .get_latest_release_dates(&[product.id, unreleased.id])
        .await?;

    assert_eq!(latest.get(&product.id), Some(&newest.release_date));
    assert!(!latest.contains_key(&unreleased.id));

    Ok(())
}
