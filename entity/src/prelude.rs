pub use super::contact_person::Entity as ContactPerson;
pub use super::contact_person_product::Entity as ContactPersonProduct;
pub use super::customer::Entity as Customer;
pub use super::customer_adviser::Entity as CustomerAdviser;
pub use super::heartbeat::Entity as Heartbeat;
pub use super::license::Entity as License;
pub use super::location::Entity as Location;
pub use super::software_module::Entity as SoftwareModule;
pub use super::software_product::Entity as SoftwareProduct;
pub use super::software_update::Entity as SoftwareUpdate;
pub use super::used_software_product::Entity as UsedSoftwareProduct;
pub use super::user::Entity as User;
