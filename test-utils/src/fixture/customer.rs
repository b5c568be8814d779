//! Customer fixtures for creating in-memory test data.

use entity::customer;

/// Default test customer number.
pub const DEFAULT_CUSTOMER_NUMBER: &str = "K-100000";

/// Default test customer name.
pub const DEFAULT_NAME: &str = "Muster GmbH";

/// Creates a customer entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - customer_number: `"K-100000"`
/// - name: `"Muster GmbH"`
pub fn entity() -> customer::Model {
    entity_builder().build()
}

/// Creates a customer entity builder for customization.
pub fn entity_builder() -> CustomerEntityBuilder {
    CustomerEntityBuilder::default()
}

/// Builder for customized customer entity models.
pub struct CustomerEntityBuilder {
    id: i32,
    customer_number: String,
    name: String,
}

impl Default for CustomerEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            customer_number: DEFAULT_CUSTOMER_NUMBER.to_string(),
            name: DEFAULT_NAME.to_string(),
        }
    }
}

impl CustomerEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn customer_number(mut self, customer_number: impl Into<String>) -> Self {
        self.customer_number = customer_number.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn build(self) -> customer::Model {
        customer::Model {
            id: self.id,
            customer_number: self.customer_number,
            name: self.name,
        }
    }
}
