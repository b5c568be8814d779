//! Domain models and operation parameters.
//!
//! Services accept `*Params` types and return the domain models defined here.
//! Conversions from SeaORM entities happen at the repository boundary
//! (`from_entity`), conversions to DTOs at the controller boundary (`into_dto`).

pub mod customer;
pub mod dashboard;
pub mod heartbeat;
pub mod license;
pub mod location;
pub mod person;
pub mod product;
pub mod search;
pub mod status;
pub mod update;
pub mod user;

/// Number of pages needed for `total` items at `per_page` items per page.
pub fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page > 0 {
        total.div_ceil(per_page)
    } else {
        0
    }
}
