//! License fixtures for creating in-memory test data.
//!
//! The default license is a location license for location `1` that started thirty
//! days ago and runs for another year.

use chrono::{DateTime, Duration, Utc};
use entity::license;

pub const DEFAULT_KEY: &str = "LIC-0000-0000";
pub const DEFAULT_DETAIL: &str = "Standardlizenz";
pub const DEFAULT_MODULE_ID: i32 = 1;
pub const DEFAULT_LOCATION_ID: i32 = 1;

/// Creates a license entity model with default values.
pub fn entity() -> license::Model {
    entity_builder().build()
}

/// Creates a license entity builder for customization.
pub fn entity_builder() -> LicenseEntityBuilder {
    LicenseEntityBuilder::default()
}

/// Builder for customized license entity models.
///
/// `customer_id` and `location_id` are mutually exclusive; setting one clears the
/// other so fixtures always satisfy the single-owner rule.
pub struct LicenseEntityBuilder {
    id: i32,
    key: String,
    detail: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    module_id: i32,
    customer_id: Option<i32>,
    location_id: Option<i32>,
    replace_license_id: Option<i32>,
}

impl Default for LicenseEntityBuilder {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: 1,
            key: DEFAULT_KEY.to_string(),
            detail: DEFAULT_DETAIL.to_string(),
            start_date: now - Duration::days(30),
            end_date: now + Duration::days(365),
            module_id: DEFAULT_MODULE_ID,
            customer_id: None,
            location_id: Some(DEFAULT_LOCATION_ID),
            replace_license_id: None,
        }
    }
}

impl LicenseEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    pub fn start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn end_date(mut self, end_date: DateTime<Utc>) -> Self {
        self.end_date = end_date;
        self
    }

    pub fn module_id(mut self, module_id: i32) -> Self {
        self.module_id = module_id;
        self
    }

    pub fn customer_id(mut self, customer_id: i32) -> Self {
        self.customer_id = Some(customer_id);
        self.location_id = None;
        self
    }

    pub fn location_id(mut self, location_id: i32) -> Self {
        self.location_id = Some(location_id);
        self.customer_id = None;
        self
    }

    pub fn replace_license_id(mut self, replace_license_id: Option<i32>) -> Self {
        self.replace_license_id = replace_license_id;
        self
    }

    pub fn build(self) -> license::Model {
        license::Model {
            id: self.id,
            key: self.key,
            detail: self.detail,
            start_date: self.start_date,
            end_date: self.end_date,
            module_id: self.module_id,
            customer_id: self.customer_id,
            location_id: self.location_id,
            replace_license_id: self.replace_license_id,
        }
    }
}
