//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixture functions create in-memory entity models for unit tests and serve as the
//! default values of the factory builders. Unlike factories, fixtures do NOT insert
//! data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let customer = fixture::customer::entity();
//!
//! let license = fixture::license::entity_builder()
//!     .key("ABC-123")
//!     .build();
//! ```

pub mod customer;
pub mod license;
pub mod location;
pub mod software_product;

pub use customer::{entity as customer_entity, entity_builder as customer_entity_builder};
pub use license::{entity as license_entity, entity_builder as license_entity_builder};
pub use location::{entity as location_entity, entity_builder as location_entity_builder};
pub use software_product::{
    entity as software_product_entity, entity_builder as software_product_entity_builder,
};
