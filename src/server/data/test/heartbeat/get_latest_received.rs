use super::*;

/// Tests picking the newest heartbeat per used product.
///
/// Used products without heartbeats are absent from the result.
///
/// Expected: Ok with one entry holding the newest timestamp
#[tokio::test]
async fn returns_newest_timestamp_per_used_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _location, product, used) =
        factory::helpers::create_used_product_with_dependencies(db).await?;
    let silent_location = factory::create_location(db, customer.id).await?;
    let silent = factory::create_used_product(db, silent_location.id, product.id).await?;

    let now = Utc::now();
    let newest = factory::heartbeat::HeartbeatFactory::new(db, used.id)
        .last_received(now - Duration::minutes(5))
        .build()
        .await?;
    factory::heartbeat::HeartbeatFactory::new(db, used.id)
        .last_received(now - Duration::days(1))
        .build()
        .await?;

    let latest = HeartbeatRepository::new(db)
        .get_latest_received(&[used.id, silent.id])
        .await?;

    assert_eq!(latest.len(), 1);
    assert_eq!(latest.get(&used.id), Some(&newest.last_received));
    assert!(!latest.contains_key(&silent.id));

    Ok(())
}
