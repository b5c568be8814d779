//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{config::Config, model::status::StatusWindows};

/// Application state containing shared resources and dependencies.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a connection pool and the
/// configuration sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Configuration loaded at startup.
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    /// Heartbeat and license expiry windows used to classify status at read time.
    pub fn windows(&self) -> StatusWindows {
        StatusWindows {
            heartbeat: self.config.heartbeat_window,
            license_expiry: self.config.license_expire_warning,
        }
    }
}
