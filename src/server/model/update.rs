//! Software update models.

use chrono::{DateTime, Utc};

use crate::model::update::{SoftwareUpdateDto, UpdateCountsDto, UpdateOverviewItemDto};

#[derive(Debug, Clone)]
pub struct CreateUpdateParams {
    pub product_id: i32,
    pub version: String,
    pub content: Vec<u8>,
}

/// Update release metadata without its payload.
#[derive(Debug, Clone, PartialEq)]
pub struct SoftwareUpdate {
    pub id: i32,
    pub product_id: i32,
    pub version: String,
    pub release_date: DateTime<Utc>,
    pub size: u64,
}

impl SoftwareUpdate {
    pub fn from_entity(entity: &entity::software_update::Model) -> Self {
        Self {
            id: entity.id,
            product_id: entity.product_id,
            version: entity.version.clone(),
            release_date: entity.release_date,
            size: entity.content.len() as u64,
        }
    }

    pub fn into_dto(self) -> SoftwareUpdateDto {
        SoftwareUpdateDto {
            id: self.id,
            product_id: self.product_id,
            version: self.version,
            release_date: self.release_date,
            size: self.size,
        }
    }
}

/// Update payload ready for download.
#[derive(Debug, Clone)]
pub struct UpdateDownload {
    pub file_name: String,
    pub content: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct UpdateOverviewItem {
    pub used_product_id: i32,
    pub location_id: i32,
    pub location_name: String,
    pub product_id: i32,
    pub product_name: String,
    pub version: String,
    pub product_version: String,
    pub last_updated: DateTime<Utc>,
    pub current: bool,
    pub latest_release: Option<DateTime<Utc>>,
}

impl UpdateOverviewItem {
    pub fn into_dto(self) -> UpdateOverviewItemDto {
        UpdateOverviewItemDto {
            used_product_id: self.used_product_id,
            location_id: self.location_id,
            location_name: self.location_name,
            product_id: self.product_id,
            product_name: self.product_name,
            version: self.version,
            product_version: self.product_version,
            last_updated: self.last_updated,
            current: self.current,
            latest_release: self.latest_release,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateCounts {
    pub current: u64,
    pub outdated: u64,
}

impl UpdateCounts {
    pub fn into_dto(self) -> UpdateCountsDto {
        UpdateCountsDto {
            current: self.current,
            outdated: self.outdated,
        }
    }
}
