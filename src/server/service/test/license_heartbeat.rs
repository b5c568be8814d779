use super::*;
use crate::server::{
    model::license::ConfirmReplacementParams, service::license_heartbeat::LicenseHeartbeatService,
};

/// Creates a location license with a successor starting at `successor_start`.
async fn license_with_successor(
    db: &sea_orm::DatabaseConnection,
    successor_start: chrono::DateTime<Utc>,
) -> Result<(entity::license::Model, entity::license::Model), DbErr> {
    let (_customer, location, _product, module, _license) =
        factory::helpers::create_license_with_dependencies(db).await?;
    let now = Utc::now();

    let successor = factory::license::LicenseFactory::new(db, module.id)
        .location(location.id)
        .start_date(successor_start)
        .end_date(now + Duration::days(730))
        .build()
        .await?;
    let license = factory::license::LicenseFactory::new(db, module.id)
        .location(location.id)
        .end_date(now + Duration::days(30))
        .replace_license_id(Some(successor.id))
        .build()
        .await?;

    Ok((license, successor))
}

/// Tests that a started replacement is handed out.
///
/// Expected: Ok with exist = true and the successor's key
#[tokio::test]
async fn check_returns_started_replacement() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    let (license, successor) = license_with_successor(db, now - Duration::days(1)).await?;

    let check = LicenseHeartbeatService::new(db)
        .check(&format!("  {}\n", license.key), now)
        .await?;

    assert!(check.exist);
    assert_eq!(check.key, successor.key);

    Ok(())
}

/// Tests that a replacement starting in the future is kept back.
///
/// Expected: Ok with exist = false and an empty key
#[tokio::test]
async fn check_hides_future_replacement() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    let (license, _successor) = license_with_successor(db, now + Duration::days(7)).await?;

    let check = LicenseHeartbeatService::new(db)
        .check(&license.key, now)
        .await?;

    assert!(!check.exist);
    assert!(check.key.is_empty());

    Ok(())
}

/// Tests checking an unknown key.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn check_unknown_key_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = LicenseHeartbeatService::new(db)
        .check("GIBT-ES-NICHT", Utc::now())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests confirming the switch to the replacement.
///
/// Expected: Ok with the old license ended now and its link cleared
#[tokio::test]
async fn confirm_ends_old_license() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    let (license, successor) = license_with_successor(db, now - Duration::days(1)).await?;

    let message = LicenseHeartbeatService::new(db)
        .confirm(
            ConfirmReplacementParams {
                old_key: license.key.clone(),
                new_key: successor.key.clone(),
                new_exists: true,
            },
            now,
        )
        .await?;
    assert_eq!(message, "Lizenz wurde ersetzt.");

    let old = entity::prelude::License::find_by_id(license.id)
        .one(db)
        .await?
        .unwrap();
    assert!((old.end_date - now).num_seconds().abs() < 1);
    assert_eq!(old.replace_license_id, None);

    Ok(())
}

/// Tests that nothing changes without `new_exists`.
///
/// Expected: Ok with the license untouched
#[tokio::test]
async fn confirm_without_new_key_changes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    let (license, successor) = license_with_successor(db, now - Duration::days(1)).await?;

    LicenseHeartbeatService::new(db)
        .confirm(
            ConfirmReplacementParams {
                old_key: license.key.clone(),
                new_key: successor.key,
                new_exists: false,
            },
            now,
        )
        .await?;

    let old = entity::prelude::License::find_by_id(license.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(old.replace_license_id, Some(license.replace_license_id.unwrap()));
    assert_eq!(old.end_date, license.end_date);

    Ok(())
}

/// Tests confirming a key that is not the registered successor.
///
/// Expected: Err(InvalidReplacement)
#[tokio::test]
async fn confirm_rejects_unrelated_license() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    let (license, _successor) = license_with_successor(db, now - Duration::days(1)).await?;
    let (unrelated, _) = license_with_successor(db, now - Duration::days(1)).await?;

    let result = LicenseHeartbeatService::new(db)
        .confirm(
            ConfirmReplacementParams {
                old_key: license.key,
                new_key: unrelated.key,
                new_exists: true,
            },
            now,
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::InvalidReplacement(_)))
    ));

    Ok(())
}
