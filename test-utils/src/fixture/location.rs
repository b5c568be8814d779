//! Location fixtures for creating in-memory test data.

use entity::location;

/// Default test location name.
pub const DEFAULT_NAME: &str = "Hauptsitz";

/// Default customer ID for locations.
pub const DEFAULT_CUSTOMER_ID: i32 = 1;

pub const DEFAULT_EMAIL_ADDRESS: &str = "info@example.com";
pub const DEFAULT_PHONE_NUMBER: &str = "0621 123456";
pub const DEFAULT_STREET: &str = "Ulmenweg";
pub const DEFAULT_HOUSE_NUMBER: &str = "5A";
pub const DEFAULT_POSTCODE: &str = "68167";
pub const DEFAULT_CITY: &str = "Mannheim";

/// Creates a location entity model with default values and no adviser.
pub fn entity() -> location::Model {
    entity_builder().build()
}

/// Creates a location entity builder for customization.
pub fn entity_builder() -> LocationEntityBuilder {
    LocationEntityBuilder::default()
}

/// Builder for customized location entity models.
pub struct LocationEntityBuilder {
    id: i32,
    customer_id: i32,
    adviser_id: Option<i32>,
    name: String,
    city: String,
    postcode: String,
}

impl Default for LocationEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            customer_id: DEFAULT_CUSTOMER_ID,
            adviser_id: None,
            name: DEFAULT_NAME.to_string(),
            city: DEFAULT_CITY.to_string(),
            postcode: DEFAULT_POSTCODE.to_string(),
        }
    }
}

impl LocationEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn customer_id(mut self, customer_id: i32) -> Self {
        self.customer_id = customer_id;
        self
    }

    pub fn adviser_id(mut self, adviser_id: Option<i32>) -> Self {
        self.adviser_id = adviser_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn postcode(mut self, postcode: impl Into<String>) -> Self {
        self.postcode = postcode.into();
        self
    }

    pub fn build(self) -> location::Model {
        location::Model {
            id: self.id,
            customer_id: self.customer_id,
            adviser_id: self.adviser_id,
            name: self.name,
            email_address: DEFAULT_EMAIL_ADDRESS.to_string(),
            phone_number: DEFAULT_PHONE_NUMBER.to_string(),
            street: DEFAULT_STREET.to_string(),
            house_number: DEFAULT_HOUSE_NUMBER.to_string(),
            postcode: self.postcode,
            city: self.city,
        }
    }
}
