use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        license::LicenseRepository, software_module::SoftwareModuleRepository,
        software_product::SoftwareProductRepository,
    },
    error::{validation::ValidationError, AppError},
    model::{
        license::License,
        product::{Module, SaveModuleParams},
    },
    service::used_product::UsedProductSync,
    util::validate,
};

const NAME_MAX: usize = 127;

pub struct SoftwareModuleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SoftwareModuleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: SaveModuleParams) -> Result<Module, AppError> {
        validate::required(&params.name, "Name", NAME_MAX)?;

        if SoftwareProductRepository::new(self.db)
            .get_by_id(params.product_id)
            .await?
            .is_none()
        {
            return Err(ValidationError::UnknownReference("Produkt").into());
        }

        let module = SoftwareModuleRepository::new(self.db).create(params).await?;

        Ok(Module::from_entity(module))
    }

    /// Renames a module.
    pub async fn update(&self, id: i32, name: String) -> Result<Module, AppError> {
        validate::required(&name, "Name", NAME_MAX)?;

        let module = SoftwareModuleRepository::new(self.db)
            .update(id, name)
            .await?
            .ok_or_else(|| AppError::NotFound("Modul nicht gefunden.".to_string()))?;

        Ok(Module::from_entity(module))
    }

    /// Deletes a module with its licenses and drops used products no longer covered.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let sync = UsedProductSync::new(self.db);

        let licenses = LicenseRepository::new(self.db).get_by_module(id).await?;

        let mut pairs = Vec::new();
        for license in licenses {
            let license = License::from_entity(license)?;
            pairs.extend(sync.pairs_for(license.owner, id).await?);
        }

        if !SoftwareModuleRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Modul nicht gefunden.".to_string()));
        }

        sync.sync(pairs).await?;

        Ok(())
    }
}
