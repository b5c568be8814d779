use super::*;

/// Tests the enriched license list.
///
/// Expected: Ok with licenses ordered by end date and related rows attached
#[tokio::test]
async fn returns_licenses_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, location, product, module, later) =
        factory::helpers::create_license_with_dependencies(db).await?;
    let sooner = factory::license::LicenseFactory::new(db, module.id)
        .customer(customer.id)
        .end_date(Utc::now() + Duration::days(5))
        .replace_license_id(Some(later.id))
        .build()
        .await?;

    let rows = LicenseRepository::new(db).get_list(None).await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].license.id, sooner.id);
    assert_eq!(rows[0].customer.as_ref().map(|c| c.id), Some(customer.id));
    assert!(rows[0].location.is_none());
    assert_eq!(
        rows[0].replacement.as_ref().map(|r| r.key.clone()),
        Some(later.key.clone())
    );
    assert_eq!(rows[1].license.id, later.id);
    assert_eq!(rows[1].location.as_ref().map(|l| l.id), Some(location.id));
    assert_eq!(rows[1].customer.as_ref().map(|c| c.id), Some(customer.id));
    assert_eq!(rows[1].product.as_ref().map(|p| p.id), Some(product.id));
    assert_eq!(rows[1].module.as_ref().map(|m| m.id), Some(module.id));

    Ok(())
}

/// Tests limiting the list.
///
/// Expected: Ok with at most `limit` licenses
#[tokio::test]
async fn respects_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, location, _product, module, _license) =
        factory::helpers::create_license_with_dependencies(db).await?;
    factory::create_location_license(db, module.id, location.id).await?;
    factory::create_location_license(db, module.id, location.id).await?;

    let rows = LicenseRepository::new(db).get_list(Some(2)).await?;

    assert_eq!(rows.len(), 2);

    Ok(())
}
