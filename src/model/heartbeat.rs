use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Form posted by the heartbeat agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HeartbeatForm {
    pub key: String,
    #[serde(default)]
    pub log: String,
    pub detail: Option<String>,
    pub version: Option<String>,
    pub location_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HeartbeatDto {
    pub id: i32,
    pub used_product_id: i32,
    pub last_received: DateTime<Utc>,
    pub message: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedHeartbeatsDto {
    pub heartbeats: Vec<HeartbeatDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum HeartbeatStatusDto {
    Received,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HeartbeatOverviewItemDto {
    pub used_product_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub location_id: i32,
    pub location_name: String,
    /// Newest heartbeat; absent when none was ever received.
    pub last_received: Option<DateTime<Utc>>,
    pub status: HeartbeatStatusDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HeartbeatCountsDto {
    pub valid: u64,
    pub missing: u64,
}
