use super::*;

/// Tests ending a license and dropping its replacement link.
///
/// Expected: Ok with new end date and no replacement; the successor is untouched
#[tokio::test]
async fn ends_license_and_clears_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, location, _product, module, successor) =
        factory::helpers::create_license_with_dependencies(db).await?;
    let license = factory::license::LicenseFactory::new(db, module.id)
        .location(location.id)
        .replace_license_id(Some(successor.id))
        .build()
        .await?;
    let end_date = Utc::now() - Duration::days(1);

    LicenseRepository::new(db)
        .end_and_clear_replacement(license.id, end_date)
        .await?;

    let stored = entity::prelude::License::find_by_id(license.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.replace_license_id, None);
    assert!((stored.end_date - end_date).num_seconds().abs() < 1);

    let successor_after = entity::prelude::License::find_by_id(successor.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(successor_after, successor);

    Ok(())
}
