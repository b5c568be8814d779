use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    model::status::{HeartbeatStatus, LicenseStatus, StatusWindows},
    service::{heartbeat::HeartbeatService, license::LicenseService},
};

/// Number of findings of one status report run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusReport {
    pub missing_heartbeats: u64,
    pub expiring_licenses: u64,
    pub expired_licenses: u64,
}

/// Starts the hourly status report.
///
/// Every full hour the job logs used products without a recent heartbeat and
/// licenses that expire soon or have expired.
pub async fn start_scheduler(
    db: DatabaseConnection,
    windows: StatusWindows,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = report_status(&db, windows, Utc::now()).await {
                tracing::error!("Error creating status report: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Status report scheduler started");

    Ok(scheduler)
}

/// Logs every missing heartbeat and every expiring or expired license.
pub async fn report_status(
    db: &DatabaseConnection,
    windows: StatusWindows,
    now: DateTime<Utc>,
) -> Result<StatusReport, AppError> {
    let mut report = StatusReport::default();

    let heartbeats = HeartbeatService::new(db)
        .overview(None, windows.heartbeat, now)
        .await?;
    for item in heartbeats
        .iter()
        .filter(|item| item.status == HeartbeatStatus::Missing)
    {
        report.missing_heartbeats += 1;
        match item.last_received {
            Some(last) => tracing::warn!(
                "No heartbeat for {} at {} since {}",
                item.product_name,
                item.location_name,
                last
            ),
            None => tracing::warn!(
                "No heartbeat ever received for {} at {}",
                item.product_name,
                item.location_name
            ),
        }
    }

    let licenses = LicenseService::new(db)
        .list(None, windows.license_expiry, now)
        .await?;
    for item in &licenses {
        match item.status {
            LicenseStatus::Valid => {}
            LicenseStatus::ExpiringSoon => {
                report.expiring_licenses += 1;
                tracing::warn!(
                    "License {} of {} ({}) expires on {}",
                    item.license.key,
                    item.customer_name,
                    item.product_name,
                    item.license.end_date.date_naive()
                );
            }
            LicenseStatus::Expired => {
                report.expired_licenses += 1;
                tracing::warn!(
                    "License {} of {} ({}) expired on {}",
                    item.license.key,
                    item.customer_name,
                    item.product_name,
                    item.license.end_date.date_naive()
                );
            }
        }
    }

    tracing::info!(
        "Status report: {} of {} heartbeats missing, {} licenses expiring soon, {} expired",
        report.missing_heartbeats,
        heartbeats.len(),
        report.expiring_licenses,
        report.expired_licenses
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use test_utils::{builder::TestBuilder, factory};

    use super::*;

    fn windows() -> StatusWindows {
        StatusWindows {
            heartbeat: Duration::minutes(1395),
            license_expiry: Duration::days(42),
        }
    }

    /// Tests an empty database.
    ///
    /// Expected: report without findings
    #[tokio::test]
    async fn empty_database_reports_nothing() -> Result<(), AppError> {
        let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let report = report_status(db, windows(), Utc::now()).await?;

        assert_eq!(report, StatusReport::default());

        Ok(())
    }

    /// Tests counting stale heartbeats and licenses by status.
    ///
    /// Expected: one missing heartbeat, one expiring and one expired license
    #[tokio::test]
    async fn counts_missing_heartbeats_and_licenses() -> Result<(), AppError> {
        let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let now = Utc::now();

        let (_, location, product, fresh) =
            factory::helpers::create_used_product_with_dependencies(db).await?;
        factory::heartbeat::HeartbeatFactory::new(db, fresh.id)
            .last_received(now - Duration::hours(1))
            .build()
            .await?;
        let other_product = factory::create_product(db).await?;
        let stale = factory::create_used_product(db, location.id, other_product.id).await?;
        factory::heartbeat::HeartbeatFactory::new(db, stale.id)
            .last_received(now - Duration::days(3))
            .build()
            .await?;

        let module = factory::create_module(db, product.id).await?;
        factory::license::LicenseFactory::new(db, module.id)
            .location(location.id)
            .end_date(now + Duration::days(300))
            .build()
            .await?;
        factory::license::LicenseFactory::new(db, module.id)
            .location(location.id)
            .end_date(now + Duration::days(10))
            .build()
            .await?;
        factory::license::LicenseFactory::new(db, module.id)
            .location(location.id)
            .start_date(now - Duration::days(400))
            .end_date(now - Duration::days(1))
            .build()
            .await?;

        let report = report_status(db, windows(), now).await?;

        assert_eq!(report.missing_heartbeats, 1);
        assert_eq!(report.expiring_licenses, 1);
        assert_eq!(report.expired_licenses, 1);

        Ok(())
    }
}
