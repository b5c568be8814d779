//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests.
//! Each entity has its own module with a `Factory` builder for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let customer = factory::create_customer(&db).await?;
//! let location = factory::create_location(&db, customer.id).await?;
//!
//! // Whole chain customer → location → product → module → license
//! let (customer, location, product, module, license) =
//!     factory::helpers::create_license_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let license = factory::license::LicenseFactory::new(&db, module.id)
//!     .customer(customer.id)
//!     .key("ABC-123")
//!     .end_date(Utc::now() + Duration::days(10))
//!     .build()
//!     .await?;
//! ```

pub mod contact_person;
pub mod customer;
pub mod customer_adviser;
pub mod heartbeat;
pub mod helpers;
pub mod license;
pub mod location;
pub mod software_module;
pub mod software_product;
pub mod software_update;
pub mod used_software_product;
pub mod user;

pub use contact_person::create_contact_person;
pub use customer::create_customer;
pub use customer_adviser::create_adviser;
pub use heartbeat::create_heartbeat;
pub use license::{create_customer_license, create_location_license};
pub use location::create_location;
pub use software_module::create_module;
pub use software_product::create_product;
pub use software_update::create_update;
pub use used_software_product::create_used_product;
pub use user::create_user;
