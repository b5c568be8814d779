//! Read-time status classification.
//!
//! Nothing here is stored: license validity, heartbeat staleness and update status
//! are derived from timestamps and versions whenever they are displayed.

use chrono::{DateTime, Duration, Utc};

use crate::model::{heartbeat::HeartbeatStatusDto, license::LicenseStatusDto};

/// Windows used for classification, taken from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusWindows {
    /// Maximum age of the newest heartbeat to still count as received.
    pub heartbeat: Duration,
    /// Remaining validity at or below which a license is expiring soon.
    pub license_expiry: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseStatus {
    Valid,
    ExpiringSoon,
    Expired,
}

impl LicenseStatus {
    pub fn into_dto(self) -> LicenseStatusDto {
        match self {
            Self::Valid => LicenseStatusDto::Valid,
            Self::ExpiringSoon => LicenseStatusDto::ExpiringSoon,
            Self::Expired => LicenseStatusDto::Expired,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeartbeatStatus {
    Received,
    Missing,
}

impl HeartbeatStatus {
    pub fn into_dto(self) -> HeartbeatStatusDto {
        match self {
            Self::Received => HeartbeatStatusDto::Received,
            Self::Missing => HeartbeatStatusDto::Missing,
        }
    }
}

/// Classifies a license by its remaining validity.
///
/// - remaining > window: `Valid`
/// - 0 < remaining <= window: `ExpiringSoon`
/// - remaining <= 0: `Expired`
pub fn classify_license(
    end_date: DateTime<Utc>,
    now: DateTime<Utc>,
    window: Duration,
) -> LicenseStatus {
    let remaining = end_date - now;

    if remaining <= Duration::zero() {
        LicenseStatus::Expired
    } else if remaining <= window {
        LicenseStatus::ExpiringSoon
    } else {
        LicenseStatus::Valid
    }
}

/// Classifies a used product by its newest heartbeat.
///
/// Received when the heartbeat is at most `window` old, missing otherwise or when
/// no heartbeat exists.
pub fn classify_heartbeat(
    last_received: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    window: Duration,
) -> HeartbeatStatus {
    match last_received {
        Some(last) if now - last <= window => HeartbeatStatus::Received,
        _ => HeartbeatStatus::Missing,
    }
}

/// Whether an installed version matches the product's current version.
pub fn is_current(installed: &str, product_version: &str) -> bool {
    installed == product_version
}
