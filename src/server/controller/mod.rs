//! HTTP request handlers.
//!
//! Handlers check access with `AuthGuard`, convert DTOs into service parameters and
//! convert the returned domain models back into DTOs. The ingestion endpoints used by
//! client installations (`heartbeat::post_heartbeat`, `license_heartbeat`) are the
//! only ones reachable without a login.

use serde::Deserialize;
use utoipa::IntoParams;

pub mod adviser;
pub mod auth;
pub mod contact_person;
pub mod customer;
pub mod dashboard;
pub mod heartbeat;
pub mod license;
pub mod license_heartbeat;
pub mod location;
pub mod module;
pub mod product;
pub mod search;
pub mod settings;
pub mod update;

/// Page selection of paginated lists.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number starting at 0
    #[serde(default)]
    pub page: u64,
    /// Items per page (default: 10)
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

/// Row limit of the overview lists. `all` lifts the limit.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Maximum number of rows
    pub limit: Option<u64>,
    /// Return every row
    #[serde(default)]
    pub all: bool,
}

impl ListParams {
    pub fn effective_limit(&self, default: u64) -> Option<u64> {
        if self.all {
            None
        } else {
            Some(self.limit.unwrap_or(default))
        }
    }
}
