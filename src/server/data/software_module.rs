use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::product::SaveModuleParams;

pub struct SoftwareModuleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SoftwareModuleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: SaveModuleParams,
    ) -> Result<entity::software_module::Model, DbErr> {
        entity::software_module::ActiveModel {
            product_id: ActiveValue::Set(params.product_id),
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Renames a module. The owning product never changes.
    pub async fn update(
        &self,
        id: i32,
        name: String,
    ) -> Result<Option<entity::software_module::Model>, DbErr> {
        let Some(module) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::software_module::ActiveModel = module.into();
        active.name = ActiveValue::Set(name);

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::software_module::Model>, DbErr> {
        entity::prelude::SoftwareModule::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::SoftwareModule::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
