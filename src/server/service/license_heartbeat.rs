//! Replacement license hand-over to client installations.
//!
//! A client asks with its current key whether a replacement has become active. Once
//! it has written the new key, it confirms, and the old license is ended.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::license::LicenseRepository,
    error::{validation::ValidationError, AppError},
    model::license::{ConfirmReplacementParams, LicenseCheck},
};

pub struct LicenseHeartbeatService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LicenseHeartbeatService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether the license with `key` has a replacement that has started.
    pub async fn check(&self, key: &str, now: DateTime<Utc>) -> Result<LicenseCheck, AppError> {
        let repo = LicenseRepository::new(self.db);

        let license = repo
            .get_by_key(key.trim())
            .await?
            .ok_or_else(|| AppError::NotFound("Lizenz nicht gefunden.".to_string()))?;

        let replacement = match license.replace_license_id {
            Some(replacement_id) => repo.get_by_id(replacement_id).await?,
            None => None,
        };

        Ok(match replacement {
            Some(replacement) if replacement.start_date <= now => LicenseCheck {
                exist: true,
                key: replacement.key,
            },
            _ => LicenseCheck {
                exist: false,
                key: String::new(),
            },
        })
    }

    /// Ends the old license after the client switched to its replacement.
    ///
    /// Without `new_exists` nothing changes. Returns the status message for the client.
    pub async fn confirm(
        &self,
        params: ConfirmReplacementParams,
        now: DateTime<Utc>,
    ) -> Result<String, AppError> {
        if !params.new_exists {
            return Ok("Keine Änderung.".to_string());
        }

        let repo = LicenseRepository::new(self.db);

        let old = repo
            .get_by_key(params.old_key.trim())
            .await?
            .ok_or_else(|| AppError::NotFound("Lizenz nicht gefunden.".to_string()))?;
        let new = repo
            .get_by_key(params.new_key.trim())
            .await?
            .ok_or_else(|| AppError::NotFound("Lizenz nicht gefunden.".to_string()))?;

        if old.replace_license_id != Some(new.id) {
            return Err(ValidationError::InvalidReplacement(
                "Die neue Lizenz ist nicht die Folgelizenz der alten Lizenz.",
            )
            .into());
        }

        let end_date = old.end_date.min(now);
        repo.end_and_clear_replacement(old.id, end_date).await?;

        tracing::info!(
            "License '{}' replaced by '{}', ended at {}",
            old.key,
            new.key,
            end_date
        );

        Ok("Lizenz wurde ersetzt.".to_string())
    }
}
