//! License management.
//!
//! Every mutation validates ownership and replacement rules, then re-synchronises the
//! used products of all (location, product) pairs the license covered before and
//! after the change.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        customer::CustomerRepository, license::LicenseRepository, location::LocationRepository,
        software_module::SoftwareModuleRepository,
    },
    error::{validation::ValidationError, AppError},
    model::{
        license::{
            License, LicenseCounts, LicenseListItem, LicenseOwner, SaveLicenseParams,
            ALL_LOCATIONS_LABEL,
        },
        status::classify_license,
    },
    service::used_product::UsedProductSync,
    util::validate,
};

const KEY_MAX: usize = 255;
const DETAIL_MAX: usize = 2047;

pub struct LicenseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LicenseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets licenses ordered by end date, enriched and classified against `window`.
    pub async fn list(
        &self,
        limit: Option<u64>,
        window: Duration,
        now: DateTime<Utc>,
    ) -> Result<Vec<LicenseListItem>, AppError> {
        let rows = LicenseRepository::new(self.db).get_list(limit).await?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            let license = License::from_entity(row.license)?;
            let location_name = match license.owner {
                LicenseOwner::Customer(_) => ALL_LOCATIONS_LABEL.to_string(),
                LicenseOwner::Location(_) => {
                    row.location.map(|l| l.name).unwrap_or_default()
                }
            };

            items.push(LicenseListItem {
                status: classify_license(license.end_date, now, window),
                product_name: row.product.map(|p| p.name).unwrap_or_default(),
                module_name: row.module.map(|m| m.name).unwrap_or_default(),
                customer_name: row.customer.map(|c| c.name).unwrap_or_default(),
                location_name,
                replacement_key: row.replacement.map(|r| r.key),
                license,
            });
        }

        Ok(items)
    }

    /// Counts all licenses per validity class.
    pub async fn counts(
        &self,
        window: Duration,
        now: DateTime<Utc>,
    ) -> Result<LicenseCounts, AppError> {
        let mut counts = LicenseCounts::default();

        for item in self.list(None, window, now).await? {
            counts.add(item.status);
        }

        Ok(counts)
    }

    pub async fn get(&self, id: i32) -> Result<License, AppError> {
        let license = LicenseRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Lizenz nicht gefunden.".to_string()))?;

        Ok(License::from_entity(license)?)
    }

    pub async fn create(&self, params: SaveLicenseParams) -> Result<License, AppError> {
        self.validate(&params, None).await?;

        let sync = UsedProductSync::new(self.db);
        let pairs = sync.pairs_for(params.owner, params.module_id).await?;

        let license = LicenseRepository::new(self.db).create(params).await?;
        sync.sync(pairs).await?;

        tracing::info!("Created license {} '{}'", license.id, license.key);

        Ok(License::from_entity(license)?)
    }

    pub async fn update(&self, id: i32, params: SaveLicenseParams) -> Result<License, AppError> {
        let previous = self.get(id).await?;
        self.validate(&params, Some(id)).await?;

        let sync = UsedProductSync::new(self.db);
        let mut pairs = sync.pairs_for(previous.owner, previous.module_id).await?;
        pairs.extend(sync.pairs_for(params.owner, params.module_id).await?);

        let license = LicenseRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Lizenz nicht gefunden.".to_string()))?;
        sync.sync(pairs).await?;

        Ok(License::from_entity(license)?)
    }

    /// Deletes a license and removes used products it alone covered.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let license = self.get(id).await?;

        let sync = UsedProductSync::new(self.db);
        let pairs = sync.pairs_for(license.owner, license.module_id).await?;

        LicenseRepository::new(self.db).delete(id).await?;
        sync.sync(pairs).await?;

        tracing::info!("Deleted license {} '{}'", license.id, license.key);

        Ok(())
    }

    async fn validate(&self, params: &SaveLicenseParams, id: Option<i32>) -> Result<(), AppError> {
        validate::required(&params.key, "Lizenzschlüssel", KEY_MAX)?;
        validate::max_len(&params.detail, "Beschreibung", DETAIL_MAX)?;

        if params.end_date <= params.start_date {
            return Err(ValidationError::EndBeforeStart.into());
        }

        let repo = LicenseRepository::new(self.db);
        if repo.key_taken(&params.key, id).await? {
            return Err(ValidationError::Taken("Dieser Lizenzschlüssel").into());
        }

        if SoftwareModuleRepository::new(self.db)
            .get_by_id(params.module_id)
            .await?
            .is_none()
        {
            return Err(ValidationError::UnknownReference("Modul").into());
        }

        match params.owner {
            LicenseOwner::Customer(customer_id) => {
                if CustomerRepository::new(self.db)
                    .get_by_id(customer_id)
                    .await?
                    .is_none()
                {
                    return Err(ValidationError::UnknownReference("Kunde").into());
                }
            }
            LicenseOwner::Location(location_id) => {
                if LocationRepository::new(self.db)
                    .get_by_id(location_id)
                    .await?
                    .is_none()
                {
                    return Err(ValidationError::UnknownReference("Standort").into());
                }
            }
        }

        if let Some(replacement_id) = params.replace_license_id {
            self.validate_replacement(params, id, replacement_id).await?;
        }

        if let Some(id) = id {
            self.validate_as_replacement(params, id).await?;
        }

        Ok(())
    }

    /// Checks the license that names `id` as its replacement against the new values.
    async fn validate_as_replacement(
        &self,
        params: &SaveLicenseParams,
        id: i32,
    ) -> Result<(), AppError> {
        let Some(predecessor) = LicenseRepository::new(self.db).get_replaced_by(id).await? else {
            return Ok(());
        };
        let predecessor = License::from_entity(predecessor)?;

        check_successor(
            (predecessor.module_id, predecessor.owner, predecessor.end_date),
            (params.module_id, params.owner, params.end_date),
        )
    }

    async fn validate_replacement(
        &self,
        params: &SaveLicenseParams,
        id: Option<i32>,
        replacement_id: i32,
    ) -> Result<(), AppError> {
        if id == Some(replacement_id) {
            return Err(ValidationError::InvalidReplacement(
                "Eine Lizenz kann sich nicht selbst ersetzen.",
            )
            .into());
        }

        let repo = LicenseRepository::new(self.db);
        let replacement = repo
            .get_by_id(replacement_id)
            .await?
            .ok_or(ValidationError::UnknownReference("Folgelizenz"))?;
        let replacement = License::from_entity(replacement)?;

        check_successor(
            (params.module_id, params.owner, params.end_date),
            (replacement.module_id, replacement.owner, replacement.end_date),
        )?;

        if let Some(replaced) = repo.get_replaced_by(replacement_id).await? {
            if Some(replaced.id) != id {
                return Err(ValidationError::InvalidReplacement(
                    "Die Folgelizenz ersetzt bereits eine andere Lizenz.",
                )
                .into());
            }
        }

        Ok(())
    }
}

/// Module, owner and end date of a license in a replacement chain.
type ReplacementTerms = (i32, LicenseOwner, DateTime<Utc>);

/// A successor must share module and owner with its predecessor and end after it.
fn check_successor(
    (module_id, owner, end_date): ReplacementTerms,
    (successor_module_id, successor_owner, successor_end_date): ReplacementTerms,
) -> Result<(), AppError> {
    if successor_module_id != module_id {
        return Err(ValidationError::InvalidReplacement(
            "Die Folgelizenz muss für dasselbe Modul gelten.",
        )
        .into());
    }

    if successor_owner != owner {
        return Err(ValidationError::InvalidReplacement(
            "Die Folgelizenz muss für denselben Kunden bzw. Standort gelten.",
        )
        .into());
    }

    if successor_end_date <= end_date {
        return Err(ValidationError::InvalidReplacement(
            "Die Folgelizenz muss nach dieser Lizenz enden.",
        )
        .into());
    }

    Ok(())
}
