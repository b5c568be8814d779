//! Heartbeat ingestion and staleness overview.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        heartbeat::HeartbeatRepository, license::LicenseRepository, location::LocationRepository,
        software_module::SoftwareModuleRepository,
        used_software_product::UsedSoftwareProductRepository,
    },
    error::{validation::ValidationError, AppError},
    model::{
        heartbeat::{
            Heartbeat, HeartbeatCounts, HeartbeatOverviewItem, IngestHeartbeatParams,
            PaginatedHeartbeats,
        },
        license::{License, LicenseOwner},
        status::{classify_heartbeat, HeartbeatStatus},
        total_pages,
    },
    service::software_product::VERSION_MAX,
    util::validate,
};

/// Maximum stored length of heartbeat message and detail.
const TEXT_MAX: usize = 2047;

pub struct HeartbeatService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HeartbeatService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a heartbeat posted by a client installation.
    ///
    /// The license key identifies the product; the location comes from the license or,
    /// for customer licenses, from `location_id` or the single covered location using
    /// the product. A reported version updates the used product.
    pub async fn ingest(
        &self,
        params: IngestHeartbeatParams,
        now: DateTime<Utc>,
    ) -> Result<Heartbeat, AppError> {
        if let Some(version) = &params.version {
            validate::max_len(version, "Version", VERSION_MAX)?;
        }

        let license = LicenseRepository::new(self.db)
            .get_by_key(&params.key)
            .await?
            .ok_or_else(|| AppError::NotFound("Lizenz nicht gefunden.".to_string()))?;
        let license = License::from_entity(license)?;

        let module = SoftwareModuleRepository::new(self.db)
            .get_by_id(license.module_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Modul nicht gefunden.".to_string()))?;

        let location_id = self
            .resolve_location(license.owner, module.product_id, params.location_id)
            .await?;

        let used_repo = UsedSoftwareProductRepository::new(self.db);
        let used_product = match used_repo.get(location_id, module.product_id).await? {
            Some(used_product) => used_product,
            None => used_repo.create(location_id, module.product_id).await?,
        };

        let heartbeat = HeartbeatRepository::new(self.db)
            .create(
                used_product.id,
                validate::truncate(&params.log, TEXT_MAX),
                validate::truncate(params.detail.as_deref().unwrap_or_default(), TEXT_MAX),
                now,
            )
            .await?;

        if let Some(version) = &params.version {
            if *version != used_product.version {
                used_repo.set_version(used_product.id, version, now).await?;
                tracing::info!(
                    "Used product {} reported version {} (was '{}')",
                    used_product.id,
                    version,
                    used_product.version
                );
            }
        }

        tracing::debug!(
            "Heartbeat {} received for used product {}",
            heartbeat.id,
            used_product.id
        );

        Ok(Heartbeat::from_entity(heartbeat))
    }

    /// Gets used products with their newest heartbeat, missing ones first.
    pub async fn overview(
        &self,
        limit: Option<u64>,
        window: Duration,
        now: DateTime<Utc>,
    ) -> Result<Vec<HeartbeatOverviewItem>, AppError> {
        let rows = UsedSoftwareProductRepository::new(self.db)
            .get_list(limit)
            .await?;

        let ids: Vec<i32> = rows.iter().map(|row| row.used_product.id).collect();
        let latest = HeartbeatRepository::new(self.db)
            .get_latest_received(&ids)
            .await?;

        let mut items: Vec<HeartbeatOverviewItem> = rows
            .into_iter()
            .map(|row| {
                let last_received = latest.get(&row.used_product.id).copied();
                HeartbeatOverviewItem {
                    used_product_id: row.used_product.id,
                    product_id: row.product.id,
                    product_name: row.product.name,
                    location_id: row.location.id,
                    location_name: row.location.name,
                    last_received,
                    status: classify_heartbeat(last_received, now, window),
                }
            })
            .collect();

        items.sort_by_key(|item| (item.status == HeartbeatStatus::Received, item.last_received));

        Ok(items)
    }

    /// Counts used products with a received and with a missing heartbeat.
    pub async fn counts(
        &self,
        window: Duration,
        now: DateTime<Utc>,
    ) -> Result<HeartbeatCounts, AppError> {
        let mut counts = HeartbeatCounts::default();

        for item in self.overview(None, window, now).await? {
            match item.status {
                HeartbeatStatus::Received => counts.valid += 1,
                HeartbeatStatus::Missing => counts.missing += 1,
            }
        }

        Ok(counts)
    }

    /// Gets a page of heartbeats of one used product, newest first.
    pub async fn list_for_used_product(
        &self,
        used_product_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedHeartbeats, AppError> {
        if UsedSoftwareProductRepository::new(self.db)
            .get_by_id(used_product_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(
                "Eingesetztes Produkt nicht gefunden.".to_string(),
            ));
        }

        let (heartbeats, total) = HeartbeatRepository::new(self.db)
            .get_paginated_by_used_product(used_product_id, page, per_page)
            .await?;

        Ok(PaginatedHeartbeats {
            heartbeats: heartbeats.into_iter().map(Heartbeat::from_entity).collect(),
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    async fn resolve_location(
        &self,
        owner: LicenseOwner,
        product_id: i32,
        requested: Option<i32>,
    ) -> Result<i32, AppError> {
        let customer_id = match owner {
            LicenseOwner::Location(location_id) => return Ok(location_id),
            LicenseOwner::Customer(customer_id) => customer_id,
        };

        let location_repo = LocationRepository::new(self.db);

        if let Some(location_id) = requested {
            let location = location_repo.get_by_id(location_id).await?;
            return match location {
                Some(location) if location.customer_id == customer_id => Ok(location.id),
                _ => Err(ValidationError::LocationNotOfCustomer.into()),
            };
        }

        let locations = location_repo.get_by_customer(customer_id).await?;
        let location_ids: Vec<i32> = locations.iter().map(|l| l.id).collect();

        let used_products = UsedSoftwareProductRepository::new(self.db)
            .get_for_product_at(product_id, location_ids.clone())
            .await?;

        match (used_products.as_slice(), location_ids.as_slice()) {
            ([used_product], _) => Ok(used_product.location_id),
            ([], [location_id]) => Ok(*location_id),
            _ => Err(ValidationError::AmbiguousLocation.into()),
        }
    }
}
