//! Heartbeat models.

use chrono::{DateTime, Utc};

use crate::{
    model::heartbeat::{
        HeartbeatCountsDto, HeartbeatDto, HeartbeatForm, HeartbeatOverviewItemDto,
        PaginatedHeartbeatsDto,
    },
    server::model::status::HeartbeatStatus,
};

/// Heartbeat as posted by a client installation.
#[derive(Debug, Clone)]
pub struct IngestHeartbeatParams {
    pub key: String,
    pub log: String,
    pub detail: Option<String>,
    pub version: Option<String>,
    pub location_id: Option<i32>,
}

impl IngestHeartbeatParams {
    pub fn from_form(form: HeartbeatForm) -> Self {
        Self {
            key: form.key.trim().to_string(),
            log: form.log,
            detail: form.detail,
            version: form
                .version
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            location_id: form.location_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Heartbeat {
    pub id: i32,
    pub used_product_id: i32,
    pub last_received: DateTime<Utc>,
    pub message: String,
    pub detail: String,
}

impl Heartbeat {
    pub fn from_entity(entity: entity::heartbeat::Model) -> Self {
        Self {
            id: entity.id,
            used_product_id: entity.used_product_id,
            last_received: entity.last_received,
            message: entity.message,
            detail: entity.detail,
        }
    }

    pub fn into_dto(self) -> HeartbeatDto {
        HeartbeatDto {
            id: self.id,
            used_product_id: self.used_product_id,
            last_received: self.last_received,
            message: self.message,
            detail: self.detail,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedHeartbeats {
    pub heartbeats: Vec<Heartbeat>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedHeartbeats {
    pub fn into_dto(self) -> PaginatedHeartbeatsDto {
        PaginatedHeartbeatsDto {
            heartbeats: self.heartbeats.into_iter().map(Heartbeat::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Used product joined with its product and location.
#[derive(Debug, Clone)]
pub struct UsedProductWithRelations {
    pub used_product: entity::used_software_product::Model,
    pub product: entity::software_product::Model,
    pub location: entity::location::Model,
}

/// Used product row of the heartbeat overview.
#[derive(Debug, Clone)]
pub struct HeartbeatOverviewItem {
    pub used_product_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub location_id: i32,
    pub location_name: String,
    pub last_received: Option<DateTime<Utc>>,
    pub status: HeartbeatStatus,
}

impl HeartbeatOverviewItem {
    pub fn into_dto(self) -> HeartbeatOverviewItemDto {
        HeartbeatOverviewItemDto {
            used_product_id: self.used_product_id,
            product_id: self.product_id,
            product_name: self.product_name,
            location_id: self.location_id,
            location_name: self.location_name,
            last_received: self.last_received,
            status: self.status.into_dto(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeartbeatCounts {
    pub valid: u64,
    pub missing: u64,
}

impl HeartbeatCounts {
    pub fn into_dto(self) -> HeartbeatCountsDto {
        HeartbeatCountsDto {
            valid: self.valid,
            missing: self.missing,
        }
    }
}
