use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::license::{LicenseOwner, LicenseWithRelations, SaveLicenseParams};

pub struct LicenseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LicenseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: SaveLicenseParams) -> Result<entity::license::Model, DbErr> {
        let (customer_id, location_id) = params.owner.into_columns();

        entity::license::ActiveModel {
            key: ActiveValue::Set(params.key),
            detail: ActiveValue::Set(params.detail),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            module_id: ActiveValue::Set(params.module_id),
            customer_id: ActiveValue::Set(customer_id),
            location_id: ActiveValue::Set(location_id),
            replace_license_id: ActiveValue::Set(params.replace_license_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        id: i32,
        params: SaveLicenseParams,
    ) -> Result<Option<entity::license::Model>, DbErr> {
        let Some(license) = self.get_by_id(id).await? else {
            return Ok(None);
        };
        let (customer_id, location_id) = params.owner.into_columns();

        let mut active: entity::license::ActiveModel = license.into();
        active.key = ActiveValue::Set(params.key);
        active.detail = ActiveValue::Set(params.detail);
        active.start_date = ActiveValue::Set(params.start_date);
        active.end_date = ActiveValue::Set(params.end_date);
        active.module_id = ActiveValue::Set(params.module_id);
        active.customer_id = ActiveValue::Set(customer_id);
        active.location_id = ActiveValue::Set(location_id);
        active.replace_license_id = ActiveValue::Set(params.replace_license_id);

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::license::Model>, DbErr> {
        entity::prelude::License::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_key(&self, key: &str) -> Result<Option<entity::license::Model>, DbErr> {
        entity::prelude::License::find()
            .filter(entity::license::Column::Key.eq(key))
            .one(self.db)
            .await
    }

    pub async fn get_by_module(
        &self,
        module_id: i32,
    ) -> Result<Vec<entity::license::Model>, DbErr> {
        entity::prelude::License::find()
            .filter(entity::license::Column::ModuleId.eq(module_id))
            .all(self.db)
            .await
    }

    /// Checks whether another license already uses `key`.
    pub async fn key_taken(&self, key: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::License::find().filter(entity::license::Column::Key.eq(key));

        if let Some(id) = exclude_id {
            query = query.filter(entity::license::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets the license that names `replacement_id` as its replacement, if any.
    pub async fn get_replaced_by(
        &self,
        replacement_id: i32,
    ) -> Result<Option<entity::license::Model>, DbErr> {
        entity::prelude::License::find()
            .filter(entity::license::Column::ReplaceLicenseId.eq(replacement_id))
            .one(self.db)
            .await
    }

    /// Sets the end date and removes the replacement link of a license.
    pub async fn end_and_clear_replacement(
        &self,
        id: i32,
        end_date: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::License::update_many()
            .col_expr(entity::license::Column::EndDate, Expr::value(end_date))
            .col_expr(
                entity::license::Column::ReplaceLicenseId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::license::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::License::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts licenses for a module of `product_id` that cover the location.
    ///
    /// A location is covered by its own licenses and by the licenses of its customer.
    pub async fn count_covering(
        &self,
        location_id: i32,
        customer_id: i32,
        product_id: i32,
    ) -> Result<u64, DbErr> {
        entity::prelude::License::find()
            .inner_join(entity::prelude::SoftwareModule)
            .filter(entity::software_module::Column::ProductId.eq(product_id))
            .filter(
                Condition::any()
                    .add(entity::license::Column::LocationId.eq(location_id))
                    .add(entity::license::Column::CustomerId.eq(customer_id)),
            )
            .count(self.db)
            .await
    }

    /// Product IDs licensed to a whole customer.
    pub async fn get_customer_product_ids(&self, customer_id: i32) -> Result<Vec<i32>, DbErr> {
        let licenses = entity::prelude::License::find()
            .filter(entity::license::Column::CustomerId.eq(customer_id))
            .find_also_related(entity::prelude::SoftwareModule)
            .all(self.db)
            .await?;

        let mut product_ids: Vec<i32> = licenses
            .into_iter()
            .filter_map(|(_, module)| module.map(|m| m.product_id))
            .collect();
        product_ids.sort_unstable();
        product_ids.dedup();

        Ok(product_ids)
    }

    /// Gets licenses ordered by end date, up to `limit` if given, with everything the
    /// overview shows.
    pub async fn get_list(
        &self,
        limit: Option<u64>,
    ) -> Result<Vec<LicenseWithRelations>, DbErr> {
        let licenses = entity::prelude::License::find()
            .order_by_asc(entity::license::Column::EndDate)
            .order_by_asc(entity::license::Column::Id)
            .limit(limit)
            .find_also_related(entity::prelude::SoftwareModule)
            .all(self.db)
            .await?;

        let product_ids: Vec<i32> = licenses
            .iter()
            .filter_map(|(_, module)| module.as_ref().map(|m| m.product_id))
            .collect();
        let location_ids: Vec<i32> = licenses
            .iter()
            .filter_map(|(license, _)| license.location_id)
            .collect();
        let replacement_ids: Vec<i32> = licenses
            .iter()
            .filter_map(|(license, _)| license.replace_license_id)
            .collect();

        let products: HashMap<i32, entity::software_product::Model> =
            entity::prelude::SoftwareProduct::find()
                .filter(entity::software_product::Column::Id.is_in(product_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|p| (p.id, p))
                .collect();

        let locations: HashMap<i32, entity::location::Model> = entity::prelude::Location::find()
            .filter(entity::location::Column::Id.is_in(location_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|l| (l.id, l))
            .collect();

        let mut customer_ids: Vec<i32> = licenses
            .iter()
            .filter_map(|(license, _)| license.customer_id)
            .collect();
        customer_ids.extend(locations.values().map(|l| l.customer_id));

        let customers: HashMap<i32, entity::customer::Model> = entity::prelude::Customer::find()
            .filter(entity::customer::Column::Id.is_in(customer_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let replacements: HashMap<i32, entity::license::Model> = entity::prelude::License::find()
            .filter(entity::license::Column::Id.is_in(replacement_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|l| (l.id, l))
            .collect();

        Ok(licenses
            .into_iter()
            .map(|(license, module)| {
                let product = module
                    .as_ref()
                    .and_then(|m| products.get(&m.product_id).cloned());
                let location = license
                    .location_id
                    .and_then(|id| locations.get(&id).cloned());
                let customer_id = match LicenseOwner::from_columns(
                    license.customer_id,
                    license.location_id,
                ) {
                    Some(LicenseOwner::Customer(id)) => Some(id),
                    _ => location.as_ref().map(|l| l.customer_id),
                };
                let customer = customer_id.and_then(|id| customers.get(&id).cloned());
                let replacement = license
                    .replace_license_id
                    .and_then(|id| replacements.get(&id).cloned());

                LicenseWithRelations {
                    license,
                    module,
                    product,
                    customer,
                    location,
                    replacement,
                }
            })
            .collect())
    }
}
