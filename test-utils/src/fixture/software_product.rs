//! Software product fixtures for creating in-memory test data.

use entity::software_product;

pub const DEFAULT_NAME: &str = "Warenwirtschaft";
pub const DEFAULT_CATEGORY: &str = "ERP";
pub const DEFAULT_VERSION: &str = "2.7.1";

/// Creates a software product entity model with default values and no adviser.
pub fn entity() -> software_product::Model {
    entity_builder().build()
}

/// Creates a software product entity builder for customization.
pub fn entity_builder() -> SoftwareProductEntityBuilder {
    SoftwareProductEntityBuilder::default()
}

/// Builder for customized software product entity models.
pub struct SoftwareProductEntityBuilder {
    id: i32,
    name: String,
    category: String,
    version: String,
    adviser: Option<String>,
}

impl Default for SoftwareProductEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            version: DEFAULT_VERSION.to_string(),
            adviser: None,
        }
    }
}

impl SoftwareProductEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn adviser(mut self, adviser: Option<String>) -> Self {
        self.adviser = adviser;
        self
    }

    pub fn build(self) -> software_product::Model {
        software_product::Model {
            id: self.id,
            name: self.name,
            category: self.category,
            version: self.version,
            adviser: self.adviser,
        }
    }
}
