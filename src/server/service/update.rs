//! Software update releases and the update status of used products.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        software_product::SoftwareProductRepository, software_update::SoftwareUpdateRepository,
        used_software_product::UsedSoftwareProductRepository,
    },
    error::{validation::ValidationError, AppError},
    model::{
        status::is_current,
        update::{
            CreateUpdateParams, SoftwareUpdate, UpdateCounts, UpdateDownload, UpdateOverviewItem,
        },
    },
    service::software_product::VERSION_MAX,
    util::validate,
};

pub struct UpdateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UpdateService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new release and makes its version the product's current version.
    pub async fn create(
        &self,
        mut params: CreateUpdateParams,
        now: DateTime<Utc>,
    ) -> Result<SoftwareUpdate, AppError> {
        params.version = params.version.trim().to_string();
        validate::required(&params.version, "Version", VERSION_MAX)?;
        if params.content.is_empty() {
            return Err(ValidationError::Required("eine Updatedatei").into());
        }

        let product_repo = SoftwareProductRepository::new(self.db);
        if product_repo.get_by_id(params.product_id).await?.is_none() {
            return Err(AppError::NotFound("Produkt nicht gefunden.".to_string()));
        }

        let update = SoftwareUpdateRepository::new(self.db)
            .create(params, now)
            .await?;
        product_repo
            .set_version(update.product_id, &update.version)
            .await?;

        tracing::info!(
            "Released version {} of product {}",
            update.version,
            update.product_id
        );

        Ok(SoftwareUpdate::from_entity(&update))
    }

    /// Gets the releases of a product, newest first.
    pub async fn list_by_product(&self, product_id: i32) -> Result<Vec<SoftwareUpdate>, AppError> {
        let updates = SoftwareUpdateRepository::new(self.db)
            .get_by_product(product_id)
            .await?;

        Ok(updates.iter().map(SoftwareUpdate::from_entity).collect())
    }

    /// Gets the payload of a release.
    pub async fn download(&self, id: i32) -> Result<UpdateDownload, AppError> {
        let update = SoftwareUpdateRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Update nicht gefunden.".to_string()))?;

        let product_name = SoftwareProductRepository::new(self.db)
            .get_by_id(update.product_id)
            .await?
            .map(|p| p.name)
            .unwrap_or_else(|| "update".to_string());

        Ok(UpdateDownload {
            file_name: download_file_name(&product_name, &update.version),
            content: update.content,
        })
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !SoftwareUpdateRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Update nicht gefunden.".to_string()));
        }

        Ok(())
    }

    /// Gets used products with installed version, current flag and latest release.
    pub async fn overview(&self, limit: Option<u64>) -> Result<Vec<UpdateOverviewItem>, AppError> {
        let rows = UsedSoftwareProductRepository::new(self.db)
            .get_list(limit)
            .await?;

        let mut product_ids: Vec<i32> = rows.iter().map(|row| row.product.id).collect();
        product_ids.sort_unstable();
        product_ids.dedup();
        let latest = SoftwareUpdateRepository::new(self.db)
            .get_latest_release_dates(&product_ids)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| UpdateOverviewItem {
                used_product_id: row.used_product.id,
                location_id: row.location.id,
                location_name: row.location.name,
                product_id: row.product.id,
                product_name: row.product.name,
                current: is_current(&row.used_product.version, &row.product.version),
                version: row.used_product.version,
                product_version: row.product.version,
                last_updated: row.used_product.last_updated,
                latest_release: latest.get(&row.product.id).copied(),
            })
            .collect())
    }

    pub async fn counts(&self) -> Result<UpdateCounts, AppError> {
        let mut counts = UpdateCounts::default();

        for row in UsedSoftwareProductRepository::new(self.db)
            .get_list(None)
            .await?
        {
            if is_current(&row.used_product.version, &row.product.version) {
                counts.current += 1;
            } else {
                counts.outdated += 1;
            }
        }

        Ok(counts)
    }

    /// Corrects the installed version of a used product by hand.
    pub async fn set_used_version(
        &self,
        used_product_id: i32,
        version: &str,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let version = version.trim();
        validate::max_len(version, "Version", VERSION_MAX)?;

        let repo = UsedSoftwareProductRepository::new(self.db);
        if repo.get_by_id(used_product_id).await?.is_none() {
            return Err(AppError::NotFound(
                "Eingesetztes Produkt nicht gefunden.".to_string(),
            ));
        }

        repo.set_version(used_product_id, version, now).await?;

        Ok(())
    }
}

/// File name offered for a release download, e.g. `Warenwirtschaft_2.7.1.zip`.
///
/// Characters other than ASCII letters, digits and `-` become `_`; the version
/// additionally keeps its dots.
fn download_file_name(product_name: &str, version: &str) -> String {
    let product = sanitize(product_name, &['-']);
    let version = sanitize(version, &['-', '.']);

    format!("{}_{}.zip", product, version)
}

fn sanitize(value: &str, keep: &[char]) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || keep.contains(&c) {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_safe_download_file_name() {
        assert_eq!(
            download_file_name("Kasse Pro/Plus", "3.1"),
            "Kasse_Pro_Plus_3.1.zip"
        );
    }

    #[test]
    fn replaces_non_ascii_and_header_characters() {
        assert_eq!(
            download_file_name("Bäckerei", "2.0\"; x=\"1"),
            "B_ckerei_2.0___x__1.zip"
        );
    }
}
