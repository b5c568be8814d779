//! Business logic layer.
//!
//! Services validate parameters, orchestrate repositories and convert entity models
//! into domain models. They return `AppError` so controllers can pass failures
//! straight through as HTTP responses.

pub mod contact_person;
pub mod customer;
pub mod customer_adviser;
pub mod dashboard;
pub mod heartbeat;
pub mod license;
pub mod license_heartbeat;
pub mod location;
pub mod search;
pub mod software_module;
pub mod software_product;
pub mod update;
pub mod used_product;
pub mod user;

#[cfg(test)]
mod test;
