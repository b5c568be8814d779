use super::*;

/// Tests storing a new installed version.
///
/// Expected: Ok with version and last_updated replaced
#[tokio::test]
async fn sets_version_and_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, _location, _product, used) =
        factory::helpers::create_used_product_with_dependencies(db).await?;
    let updated_at = Utc::now() + Duration::hours(1);

    let repo = UsedSoftwareProductRepository::new(db);
    repo.set_version(used.id, "3.1.4", updated_at).await?;

    let stored = repo.get_by_id(used.id).await?.unwrap();
    assert_eq!(stored.version, "3.1.4");
    assert!((stored.last_updated - updated_at).num_seconds().abs() < 1);

    Ok(())
}
