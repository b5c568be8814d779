//! SeaORM entity models for the management portal schema.
//!
//! Every table created by the `migration` crate has a matching module here. The
//! `prelude` re-exports each `Entity` under its table's type name so callers can
//! write `prelude::Customer::find()`.

pub mod prelude;

pub mod contact_person;
pub mod contact_person_product;
pub mod customer;
pub mod customer_adviser;
pub mod heartbeat;
pub mod license;
pub mod location;
pub mod software_module;
pub mod software_product;
pub mod software_update;
pub mod used_software_product;
pub mod user;
