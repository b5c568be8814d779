//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used for unique customer numbers, license keys and usernames across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a location license together with everything it depends on.
///
/// Creates, with default values:
/// 1. Customer
/// 2. Location of that customer
/// 3. Software product
/// 4. Software module of that product
/// 5. License for the module, owned by the location
///
/// No used software product is created; tests exercising the bookkeeping
/// create it themselves.
///
/// # Returns
/// - `Ok((customer, location, product, module, license))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_license_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::customer::Model,
        entity::location::Model,
        entity::software_product::Model,
        entity::software_module::Model,
        entity::license::Model,
    ),
    DbErr,
> {
    let customer = crate::factory::customer::create_customer(db).await?;
    let location = crate::factory::location::create_location(db, customer.id).await?;
    let product = crate::factory::software_product::create_product(db).await?;
    let module = crate::factory::software_module::create_module(db, product.id).await?;
    let license =
        crate::factory::license::create_location_license(db, module.id, location.id).await?;

    Ok((customer, location, product, module, license))
}

/// Creates a used software product with its location and product.
///
/// # Returns
/// - `Ok((customer, location, product, used_product))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_used_product_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::customer::Model,
        entity::location::Model,
        entity::software_product::Model,
        entity::used_software_product::Model,
    ),
    DbErr,
> {
    let customer = crate::factory::customer::create_customer(db).await?;
    let location = crate::factory::location::create_location(db, customer.id).await?;
    let product = crate::factory::software_product::create_product(db).await?;
    let used_product =
        crate::factory::used_software_product::create_used_product(db, location.id, product.id)
            .await?;

    Ok((customer, location, product, used_product))
}
