use super::*;
use crate::server::{
    model::license::{LicenseOwner, SaveLicenseParams},
    service::license::LicenseService,
};

fn params(module_id: i32, owner: LicenseOwner, key: &str) -> SaveLicenseParams {
    let now = Utc::now();

    SaveLicenseParams {
        key: key.to_string(),
        detail: String::new(),
        start_date: now - Duration::days(1),
        end_date: now + Duration::days(365),
        module_id,
        owner,
        replace_license_id: None,
    }
}

async fn used_product_count(db: &sea_orm::DatabaseConnection) -> Result<u64, DbErr> {
    entity::prelude::UsedSoftwareProduct::find().count(db).await
}

/// Tests that a location license creates the used product of its location.
///
/// Expected: Ok with exactly one used product for (location, product)
#[tokio::test]
async fn location_license_creates_used_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let location = factory::create_location(db, customer.id).await?;
    let product = factory::create_product(db).await?;
    let module = factory::create_module(db, product.id).await?;

    LicenseService::new(db)
        .create(params(module.id, LicenseOwner::Location(location.id), "L-1"))
        .await?;

    let used = entity::prelude::UsedSoftwareProduct::find().all(db).await?;
    assert_eq!(used.len(), 1);
    assert_eq!(used[0].location_id, location.id);
    assert_eq!(used[0].product_id, product.id);
    assert_eq!(used[0].version, "");

    Ok(())
}

/// Tests that a customer license covers every location of the customer.
///
/// A second license for another module of the same product adds nothing.
///
/// Expected: Ok with one used product per location
#[tokio::test]
async fn customer_license_covers_all_locations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    factory::create_location(db, customer.id).await?;
    factory::create_location(db, customer.id).await?;
    let product = factory::create_product(db).await?;
    let module = factory::create_module(db, product.id).await?;
    let other_module = factory::create_module(db, product.id).await?;

    let service = LicenseService::new(db);
    service
        .create(params(module.id, LicenseOwner::Customer(customer.id), "C-1"))
        .await?;
    service
        .create(params(
            other_module.id,
            LicenseOwner::Customer(customer.id),
            "C-2",
        ))
        .await?;

    assert_eq!(used_product_count(db).await?, 2);

    Ok(())
}

/// Tests that deleting the only covering license removes the used product.
///
/// Expected: Ok with used product and its heartbeats gone
#[tokio::test]
async fn delete_removes_uncovered_used_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, location, product, _module, license) =
        factory::helpers::create_license_with_dependencies(db).await?;
    let used = factory::create_used_product(db, location.id, product.id).await?;
    factory::create_heartbeat(db, used.id).await?;

    LicenseService::new(db).delete(license.id).await?;

    assert_eq!(used_product_count(db).await?, 0);
    assert_eq!(entity::prelude::Heartbeat::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a used product survives while another license still covers it.
///
/// Expected: Ok with the used product kept
#[tokio::test]
async fn delete_keeps_used_product_covered_by_customer_license() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, location, product, module, license) =
        factory::helpers::create_license_with_dependencies(db).await?;
    factory::create_used_product(db, location.id, product.id).await?;
    factory::create_customer_license(db, module.id, customer.id).await?;

    LicenseService::new(db).delete(license.id).await?;

    assert_eq!(used_product_count(db).await?, 1);

    Ok(())
}

/// Tests moving a license to another location.
///
/// Expected: Ok with the used product moved along
#[tokio::test]
async fn update_moves_used_product_to_new_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, location, product, module, license) =
        factory::helpers::create_license_with_dependencies(db).await?;
    factory::create_used_product(db, location.id, product.id).await?;
    let other_location = factory::create_location(db, customer.id).await?;

    LicenseService::new(db)
        .update(
            license.id,
            params(module.id, LicenseOwner::Location(other_location.id), &license.key),
        )
        .await?;

    let used = entity::prelude::UsedSoftwareProduct::find().all(db).await?;
    assert_eq!(used.len(), 1);
    assert_eq!(used[0].location_id, other_location.id);

    Ok(())
}

/// Tests the date and key validation.
///
/// Expected: Err(EndBeforeStart) and Err(Taken)
#[tokio::test]
async fn rejects_invalid_dates_and_duplicate_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, location, _product, module, license) =
        factory::helpers::create_license_with_dependencies(db).await?;
    let service = LicenseService::new(db);

    let mut reversed = params(module.id, LicenseOwner::Location(location.id), "L-NEU");
    reversed.end_date = reversed.start_date;
    assert!(matches!(
        service.create(reversed).await,
        Err(AppError::ValidationErr(ValidationError::EndBeforeStart))
    ));

    let duplicate = params(module.id, LicenseOwner::Location(location.id), &license.key);
    assert!(matches!(
        service.create(duplicate).await,
        Err(AppError::ValidationErr(ValidationError::Taken(_)))
    ));

    Ok(())
}

/// Tests the replacement rules.
///
/// The replacement must share module and owner and end later than the license.
///
/// Expected: Err(InvalidReplacement) for violations, Ok for a valid successor
#[tokio::test]
async fn validates_replacement_license() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, location, product, module, _license) =
        factory::helpers::create_license_with_dependencies(db).await?;
    let other_module = factory::create_module(db, product.id).await?;
    let now = Utc::now();

    let successor = factory::license::LicenseFactory::new(db, module.id)
        .location(location.id)
        .start_date(now + Duration::days(300))
        .end_date(now + Duration::days(800))
        .build()
        .await?;
    let foreign = factory::license::LicenseFactory::new(db, other_module.id)
        .location(location.id)
        .end_date(now + Duration::days(800))
        .build()
        .await?;
    let customer_wide = factory::license::LicenseFactory::new(db, module.id)
        .customer(customer.id)
        .end_date(now + Duration::days(800))
        .build()
        .await?;

    let service = LicenseService::new(db);
    let owner = LicenseOwner::Location(location.id);

    let mut wrong_module = params(module.id, owner, "R-1");
    wrong_module.replace_license_id = Some(foreign.id);
    assert!(matches!(
        service.create(wrong_module).await,
        Err(AppError::ValidationErr(ValidationError::InvalidReplacement(_)))
    ));

    let mut wrong_owner = params(module.id, owner, "R-2");
    wrong_owner.replace_license_id = Some(customer_wide.id);
    assert!(matches!(
        service.create(wrong_owner).await,
        Err(AppError::ValidationErr(ValidationError::InvalidReplacement(_)))
    ));

    let mut ends_later = params(module.id, owner, "R-3");
    ends_later.end_date = now + Duration::days(900);
    ends_later.replace_license_id = Some(successor.id);
    assert!(matches!(
        service.create(ends_later).await,
        Err(AppError::ValidationErr(ValidationError::InvalidReplacement(_)))
    ));

    let mut valid = params(module.id, owner, "R-4");
    valid.replace_license_id = Some(successor.id);
    let created = service.create(valid).await?;
    assert_eq!(created.replace_license_id, Some(successor.id));

    let mut second = params(module.id, owner, "R-5");
    second.replace_license_id = Some(successor.id);
    assert!(matches!(
        service.create(second).await,
        Err(AppError::ValidationErr(ValidationError::InvalidReplacement(_)))
    ));

    Ok(())
}

/// Tests that a license named as replacement keeps satisfying the rules when updated.
///
/// Expected: Err(InvalidReplacement) for a new owner, module or earlier end date,
/// Ok for a later end date
#[tokio::test]
async fn update_keeps_replacement_rules() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, location, product, module, _license) =
        factory::helpers::create_license_with_dependencies(db).await?;
    let other_module = factory::create_module(db, product.id).await?;
    let now = Utc::now();
    let owner = LicenseOwner::Location(location.id);

    let successor = factory::license::LicenseFactory::new(db, module.id)
        .key("FOLGE-1")
        .location(location.id)
        .start_date(now + Duration::days(300))
        .end_date(now + Duration::days(800))
        .build()
        .await?;
    let service = LicenseService::new(db);
    let mut predecessor = params(module.id, owner, "ALT-1");
    predecessor.replace_license_id = Some(successor.id);
    service.create(predecessor).await?;

    let successor_params = || {
        let mut p = params(module.id, owner, "FOLGE-1");
        p.start_date = now + Duration::days(300);
        p.end_date = now + Duration::days(800);
        p
    };

    let mut moved = successor_params();
    moved.owner = LicenseOwner::Customer(customer.id);
    assert!(matches!(
        service.update(successor.id, moved).await,
        Err(AppError::ValidationErr(ValidationError::InvalidReplacement(_)))
    ));

    let mut other = successor_params();
    other.module_id = other_module.id;
    assert!(matches!(
        service.update(successor.id, other).await,
        Err(AppError::ValidationErr(ValidationError::InvalidReplacement(_)))
    ));

    let mut shortened = successor_params();
    shortened.start_date = now;
    shortened.end_date = now + Duration::days(10);
    assert!(matches!(
        service.update(successor.id, shortened).await,
        Err(AppError::ValidationErr(ValidationError::InvalidReplacement(_)))
    ));

    let mut extended = successor_params();
    extended.end_date = now + Duration::days(900);
    let updated = service.update(successor.id, extended).await?;
    assert!(updated.end_date > now + Duration::days(800));
    assert_eq!(updated.owner, owner);

    Ok(())
}

/// Tests the overview classification and counts.
///
/// Expected: one license per class, customer licenses labelled for all locations
#[tokio::test]
async fn lists_and_counts_by_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_license_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, location, _product, module, _valid) =
        factory::helpers::create_license_with_dependencies(db).await?;
    let now = Utc::now();

    factory::license::LicenseFactory::new(db, module.id)
        .location(location.id)
        .start_date(now - Duration::days(400))
        .end_date(now - Duration::days(10))
        .build()
        .await?;
    factory::license::LicenseFactory::new(db, module.id)
        .customer(customer.id)
        .end_date(now + Duration::days(10))
        .build()
        .await?;

    let service = LicenseService::new(db);
    let window = Duration::days(42);

    let items = service.list(Some(1000), window, now).await?;
    assert_eq!(items.len(), 3);
    assert_eq!(items[1].location_name, "Für alle gültig");

    let counts = service.counts(window, now).await?;
    assert_eq!(counts.valid, 1);
    assert_eq!(counts.expiring_soon, 1);
    assert_eq!(counts.expired, 1);

    Ok(())
}
