//! Data transfer objects exchanged over the HTTP API.
//!
//! These types define the JSON (and form) shapes of requests and responses. The
//! server converts them to and from its own domain models at the controller boundary.

pub mod api;
pub mod customer;
pub mod dashboard;
pub mod heartbeat;
pub mod license;
pub mod location;
pub mod person;
pub mod product;
pub mod search;
pub mod update;
pub mod user;
