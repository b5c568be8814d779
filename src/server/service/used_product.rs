//! Used software product bookkeeping.
//!
//! A used product exists for a (location, product) pair exactly when the location is
//! covered by a license for a module of that product: its own license or one of its
//! customer. Every change to licenses, modules or location ownership calls `sync`
//! for the pairs it may have affected.

use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{
        license::LicenseRepository, location::LocationRepository,
        software_module::SoftwareModuleRepository,
        used_software_product::UsedSoftwareProductRepository,
    },
    model::license::LicenseOwner,
};

/// A (location, product) pair whose coverage may have changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CoveragePair {
    pub location_id: i32,
    pub customer_id: i32,
    pub product_id: i32,
}

pub struct UsedProductSync<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UsedProductSync<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Pairs covered by a license with the given owner and module.
    ///
    /// A location license covers one pair, a customer license one pair per location of
    /// the customer. Unknown modules or locations yield no pairs.
    pub async fn pairs_for(
        &self,
        owner: LicenseOwner,
        module_id: i32,
    ) -> Result<Vec<CoveragePair>, DbErr> {
        let Some(module) = SoftwareModuleRepository::new(self.db)
            .get_by_id(module_id)
            .await?
        else {
            return Ok(Vec::new());
        };
        let location_repo = LocationRepository::new(self.db);

        let locations = match owner {
            LicenseOwner::Location(location_id) => location_repo
                .get_by_id(location_id)
                .await?
                .into_iter()
                .collect(),
            LicenseOwner::Customer(customer_id) => {
                location_repo.get_by_customer(customer_id).await?
            }
        };

        Ok(locations
            .into_iter()
            .map(|location| CoveragePair {
                location_id: location.id,
                customer_id: location.customer_id,
                product_id: module.product_id,
            })
            .collect())
    }

    /// Creates missing and removes uncovered used products for `pairs`.
    pub async fn sync(&self, mut pairs: Vec<CoveragePair>) -> Result<(), DbErr> {
        pairs.sort_unstable();
        pairs.dedup();

        let license_repo = LicenseRepository::new(self.db);
        let used_repo = UsedSoftwareProductRepository::new(self.db);

        for pair in pairs {
            let covered = license_repo
                .count_covering(pair.location_id, pair.customer_id, pair.product_id)
                .await?
                > 0;
            let existing = used_repo.get(pair.location_id, pair.product_id).await?;

            match (covered, existing) {
                (true, None) => {
                    let used = used_repo.create(pair.location_id, pair.product_id).await?;
                    tracing::debug!(
                        "Created used product {} for location {} and product {}",
                        used.id,
                        pair.location_id,
                        pair.product_id
                    );
                }
                (false, Some(used)) => {
                    used_repo.delete(used.id).await?;
                    tracing::debug!(
                        "Removed used product {} of location {} and product {}",
                        used.id,
                        pair.location_id,
                        pair.product_id
                    );
                }
                _ => {}
            }
        }

        Ok(())
    }
}
