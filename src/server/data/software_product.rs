use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{data::matches_word, model::product::SaveProductParams};

pub struct SoftwareProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SoftwareProductRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: SaveProductParams,
    ) -> Result<entity::software_product::Model, DbErr> {
        entity::software_product::ActiveModel {
            name: ActiveValue::Set(params.name),
            category: ActiveValue::Set(params.category),
            version: ActiveValue::Set(params.version),
            adviser: ActiveValue::Set(params.adviser),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        id: i32,
        params: SaveProductParams,
    ) -> Result<Option<entity::software_product::Model>, DbErr> {
        let Some(product) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::software_product::ActiveModel = product.into();
        active.name = ActiveValue::Set(params.name);
        active.category = ActiveValue::Set(params.category);
        active.version = ActiveValue::Set(params.version);
        active.adviser = ActiveValue::Set(params.adviser);

        Ok(Some(active.update(self.db).await?))
    }

    /// Sets the product's current version.
    pub async fn set_version(&self, id: i32, version: &str) -> Result<(), DbErr> {
        entity::prelude::SoftwareProduct::update_many()
            .col_expr(
                entity::software_product::Column::Version,
                Expr::value(version.to_string()),
            )
            .filter(entity::software_product::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::software_product::Model>, DbErr> {
        entity::prelude::SoftwareProduct::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets a product with its modules ordered by name.
    pub async fn get_with_modules(
        &self,
        id: i32,
    ) -> Result<
        Option<(
            entity::software_product::Model,
            Vec<entity::software_module::Model>,
        )>,
        DbErr,
    > {
        let Some(product) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let modules = entity::prelude::SoftwareModule::find()
            .filter(entity::software_module::Column::ProductId.eq(id))
            .order_by_asc(entity::software_module::Column::Name)
            .all(self.db)
            .await?;

        Ok(Some((product, modules)))
    }

    /// Gets all products ordered by name, each with its number of modules.
    pub async fn get_all_with_module_count(
        &self,
    ) -> Result<Vec<(entity::software_product::Model, u64)>, DbErr> {
        let products = entity::prelude::SoftwareProduct::find()
            .order_by_asc(entity::software_product::Column::Name)
            .find_with_related(entity::prelude::SoftwareModule)
            .all(self.db)
            .await?;

        Ok(products
            .into_iter()
            .map(|(product, modules)| (product, modules.len() as u64))
            .collect())
    }

    /// Counts how many of `ids` exist.
    pub async fn count_existing(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::SoftwareProduct::find()
            .filter(entity::software_product::Column::Id.is_in(ids.to_vec()))
            .count(self.db)
            .await
    }

    /// Deletes a product; modules, licenses, used products and updates cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::SoftwareProduct::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Finds products whose name contains `word`, ordered by name.
    pub async fn filter(&self, word: &str) -> Result<Vec<entity::software_product::Model>, DbErr> {
        let products = entity::prelude::SoftwareProduct::find()
            .order_by_asc(entity::software_product::Column::Name)
            .all(self.db)
            .await?;

        let word = word.to_lowercase();
        Ok(products
            .into_iter()
            .filter(|p| matches_word(&p.name, &word, true))
            .collect())
    }
}
