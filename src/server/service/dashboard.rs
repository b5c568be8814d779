use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    error::AppError,
    model::{dashboard::Dashboard, status::StatusWindows},
    service::{heartbeat::HeartbeatService, license::LicenseService, update::UpdateService},
};

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn summary(
        &self,
        windows: StatusWindows,
        now: DateTime<Utc>,
    ) -> Result<Dashboard, AppError> {
        Ok(Dashboard {
            heartbeats: HeartbeatService::new(self.db)
                .counts(windows.heartbeat, now)
                .await?,
            licenses: LicenseService::new(self.db)
                .counts(windows.license_expiry, now)
                .await?,
            updates: UpdateService::new(self.db).counts().await?,
        })
    }
}
