use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SoftwareUpdateDto {
    pub id: i32,
    pub product_id: i32,
    pub version: String,
    pub release_date: DateTime<Utc>,
    /// Payload size in bytes.
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateOverviewItemDto {
    pub used_product_id: i32,
    pub location_id: i32,
    pub location_name: String,
    pub product_id: i32,
    pub product_name: String,
    /// Installed version, empty when unknown.
    pub version: String,
    pub product_version: String,
    pub last_updated: DateTime<Utc>,
    pub current: bool,
    pub latest_release: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateCountsDto {
    pub current: u64,
    pub outdated: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SetVersionDto {
    pub version: String,
}
