//! License domain models and parameters.
//!
//! A license belongs to exactly one owner. Storage keeps two nullable columns; the
//! domain uses `LicenseOwner` so the "exactly one" rule holds by construction.

use chrono::{DateTime, Utc};

use crate::{
    model::license::{
        LicenseCheckDto, LicenseCountsDto, LicenseDto, LicenseListItemDto, SaveLicenseDto,
    },
    server::{
        error::{internal::InternalError, validation::ValidationError},
        model::status::LicenseStatus,
    },
};

/// Label shown instead of a location name for customer licenses.
pub const ALL_LOCATIONS_LABEL: &str = "Für alle gültig";

/// Owner of a license: a whole customer or a single location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseOwner {
    Customer(i32),
    Location(i32),
}

impl LicenseOwner {
    /// Builds the owner from the two nullable storage columns.
    ///
    /// Returns `None` when both or neither are set.
    pub fn from_columns(customer_id: Option<i32>, location_id: Option<i32>) -> Option<Self> {
        match (customer_id, location_id) {
            (Some(customer_id), None) => Some(Self::Customer(customer_id)),
            (None, Some(location_id)) => Some(Self::Location(location_id)),
            _ => None,
        }
    }

    /// Splits the owner into `(customer_id, location_id)` columns.
    pub fn into_columns(self) -> (Option<i32>, Option<i32>) {
        match self {
            Self::Customer(id) => (Some(id), None),
            Self::Location(id) => (None, Some(id)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveLicenseParams {
    pub key: String,
    pub detail: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub module_id: i32,
    pub owner: LicenseOwner,
    pub replace_license_id: Option<i32>,
}

impl SaveLicenseParams {
    /// Converts the request body, rejecting bodies with both or neither owner.
    pub fn from_dto(dto: SaveLicenseDto) -> Result<Self, ValidationError> {
        let owner = LicenseOwner::from_columns(dto.customer_id, dto.location_id)
            .ok_or(ValidationError::AmbiguousOwner)?;

        Ok(Self {
            key: dto.key.trim().to_string(),
            detail: dto.detail.trim().to_string(),
            start_date: dto.start_date,
            end_date: dto.end_date,
            module_id: dto.module_id,
            owner,
            replace_license_id: dto.replace_license_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct License {
    pub id: i32,
    pub key: String,
    pub detail: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub module_id: i32,
    pub owner: LicenseOwner,
    pub replace_license_id: Option<i32>,
}

impl License {
    /// Converts a license row, failing if the row violates the single-owner rule.
    pub fn from_entity(entity: entity::license::Model) -> Result<Self, InternalError> {
        let owner = LicenseOwner::from_columns(entity.customer_id, entity.location_id)
            .ok_or(InternalError::InvalidLicenseOwner(entity.id))?;

        Ok(Self {
            id: entity.id,
            key: entity.key,
            detail: entity.detail,
            start_date: entity.start_date,
            end_date: entity.end_date,
            module_id: entity.module_id,
            owner,
            replace_license_id: entity.replace_license_id,
        })
    }

    pub fn into_dto(self) -> LicenseDto {
        let (customer_id, location_id) = self.owner.into_columns();

        LicenseDto {
            id: self.id,
            key: self.key,
            detail: self.detail,
            start_date: self.start_date,
            end_date: self.end_date,
            module_id: self.module_id,
            customer_id,
            location_id,
            replace_license_id: self.replace_license_id,
        }
    }
}

/// License row joined with everything the overview displays.
///
/// Related rows are optional only because they are fetched separately; with
/// foreign keys enforced they are always present, except `location` for customer
/// licenses and `replacement` for licenses without successor.
#[derive(Debug, Clone)]
pub struct LicenseWithRelations {
    pub license: entity::license::Model,
    pub module: Option<entity::software_module::Model>,
    pub product: Option<entity::software_product::Model>,
    pub customer: Option<entity::customer::Model>,
    pub location: Option<entity::location::Model>,
    pub replacement: Option<entity::license::Model>,
}

/// License row of the overview, enriched for display.
#[derive(Debug, Clone)]
pub struct LicenseListItem {
    pub license: License,
    pub product_name: String,
    pub module_name: String,
    pub customer_name: String,
    pub location_name: String,
    pub status: LicenseStatus,
    pub replacement_key: Option<String>,
}

impl LicenseListItem {
    pub fn into_dto(self) -> LicenseListItemDto {
        LicenseListItemDto {
            id: self.license.id,
            key: self.license.key,
            start_date: self.license.start_date,
            end_date: self.license.end_date,
            product_name: self.product_name,
            module_name: self.module_name,
            customer_name: self.customer_name,
            location_name: self.location_name,
            status: self.status.into_dto(),
            replacement_key: self.replacement_key,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LicenseCounts {
    pub valid: u64,
    pub expiring_soon: u64,
    pub expired: u64,
}

impl LicenseCounts {
    pub fn add(&mut self, status: LicenseStatus) {
        match status {
            LicenseStatus::Valid => self.valid += 1,
            LicenseStatus::ExpiringSoon => self.expiring_soon += 1,
            LicenseStatus::Expired => self.expired += 1,
        }
    }

    pub fn into_dto(self) -> LicenseCountsDto {
        LicenseCountsDto {
            valid: self.valid,
            expiring_soon: self.expiring_soon,
            expired: self.expired,
        }
    }
}

/// Answer to an agent asking whether its license has an active replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseCheck {
    pub exist: bool,
    pub key: String,
}

impl LicenseCheck {
    pub fn into_dto(self) -> LicenseCheckDto {
        LicenseCheckDto {
            exist: self.exist,
            key: self.key,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfirmReplacementParams {
    pub old_key: String,
    pub new_key: String,
    pub new_exists: bool,
}
