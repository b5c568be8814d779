use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::person::SaveContactPersonParams;

pub struct ContactPersonRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactPersonRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a contact person and links the given products.
    pub async fn create(
        &self,
        params: SaveContactPersonParams,
    ) -> Result<entity::contact_person::Model, DbErr> {
        let person = entity::contact_person::ActiveModel {
            location_id: ActiveValue::Set(params.location_id),
            first_name: ActiveValue::Set(params.person.first_name),
            last_name: ActiveValue::Set(params.person.last_name),
            email_address: ActiveValue::Set(params.person.email_address),
            phone_number: ActiveValue::Set(params.person.phone_number),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.insert_products(person.id, &params.product_ids).await?;

        Ok(person)
    }

    /// Updates the person and replaces its product links.
    pub async fn update(
        &self,
        id: i32,
        params: SaveContactPersonParams,
    ) -> Result<Option<entity::contact_person::Model>, DbErr> {
        let Some(person) = entity::prelude::ContactPerson::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::contact_person::ActiveModel = person.into();
        active.location_id = ActiveValue::Set(params.location_id);
        active.first_name = ActiveValue::Set(params.person.first_name);
        active.last_name = ActiveValue::Set(params.person.last_name);
        active.email_address = ActiveValue::Set(params.person.email_address);
        active.phone_number = ActiveValue::Set(params.person.phone_number);
        let person = active.update(self.db).await?;

        entity::prelude::ContactPersonProduct::delete_many()
            .filter(entity::contact_person_product::Column::ContactPersonId.eq(id))
            .exec(self.db)
            .await?;
        self.insert_products(id, &params.product_ids).await?;

        Ok(Some(person))
    }

    /// Gets a contact person with the products they are responsible for.
    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<
        Option<(
            entity::contact_person::Model,
            Vec<entity::software_product::Model>,
        )>,
        DbErr,
    > {
        let result = entity::prelude::ContactPerson::find_by_id(id)
            .find_with_related(entity::prelude::SoftwareProduct)
            .all(self.db)
            .await?;

        Ok(result.into_iter().next())
    }

    /// Gets all contact persons of a location with their products, ordered by last name.
    pub async fn get_by_location(
        &self,
        location_id: i32,
    ) -> Result<
        Vec<(
            entity::contact_person::Model,
            Vec<entity::software_product::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::ContactPerson::find()
            .filter(entity::contact_person::Column::LocationId.eq(location_id))
            .order_by_asc(entity::contact_person::Column::LastName)
            .order_by_asc(entity::contact_person::Column::Id)
            .find_with_related(entity::prelude::SoftwareProduct)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ContactPerson::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn insert_products(&self, contact_person_id: i32, product_ids: &[i32]) -> Result<(), DbErr> {
        for product_id in product_ids {
            entity::contact_person_product::ActiveModel {
                contact_person_id: ActiveValue::Set(contact_person_id),
                product_id: ActiveValue::Set(*product_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }
}
