use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LicenseStatusDto {
    Valid,
    ExpiringSoon,
    Expired,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LicenseDto {
    pub id: i32,
    pub key: String,
    pub detail: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub module_id: i32,
    pub customer_id: Option<i32>,
    pub location_id: Option<i32>,
    pub replace_license_id: Option<i32>,
}

/// License row of the overview list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LicenseListItemDto {
    pub id: i32,
    pub key: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub product_name: String,
    pub module_name: String,
    pub customer_name: String,
    /// Location name, or "Für alle gültig" for customer licenses.
    pub location_name: String,
    pub status: LicenseStatusDto,
    pub replacement_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LicenseCountsDto {
    pub valid: u64,
    pub expiring_soon: u64,
    pub expired: u64,
}

/// Request body for creating or updating a license.
///
/// Exactly one of `customer_id` and `location_id` must be set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SaveLicenseDto {
    pub key: String,
    #[serde(default)]
    pub detail: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub module_id: i32,
    pub customer_id: Option<i32>,
    pub location_id: Option<i32>,
    pub replace_license_id: Option<i32>,
}

/// Form sent by the agent to ask for a replacement license.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LicenseCheckForm {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LicenseCheckDto {
    pub exist: bool,
    pub key: String,
}

/// Form sent by the agent after it has installed a replacement key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LicenseConfirmForm {
    pub old: String,
    pub new: String,
    #[serde(default)]
    pub new_exists: bool,
}
