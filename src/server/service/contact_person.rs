use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        contact_person::ContactPersonRepository, location::LocationRepository,
        software_product::SoftwareProductRepository,
    },
    error::{validation::ValidationError, AppError},
    model::person::{ContactPerson, SaveContactPersonParams},
    util::validate,
};

pub struct ContactPersonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactPersonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_by_location(&self, location_id: i32) -> Result<Vec<ContactPerson>, AppError> {
        let persons = ContactPersonRepository::new(self.db)
            .get_by_location(location_id)
            .await?;

        Ok(persons
            .into_iter()
            .map(|(person, products)| ContactPerson::from_entity(person, products))
            .collect())
    }

    pub async fn create(&self, params: SaveContactPersonParams) -> Result<ContactPerson, AppError> {
        self.validate(&params).await?;

        let repo = ContactPersonRepository::new(self.db);
        let person = repo.create(params).await?;

        self.load(&repo, person.id).await
    }

    pub async fn update(
        &self,
        id: i32,
        params: SaveContactPersonParams,
    ) -> Result<ContactPerson, AppError> {
        self.validate(&params).await?;

        let repo = ContactPersonRepository::new(self.db);
        if repo.update(id, params).await?.is_none() {
            return Err(AppError::NotFound(
                "Ansprechpartner nicht gefunden.".to_string(),
            ));
        }

        self.load(&repo, id).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ContactPersonRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(
                "Ansprechpartner nicht gefunden.".to_string(),
            ));
        }

        Ok(())
    }

    async fn load(
        &self,
        repo: &ContactPersonRepository<'_>,
        id: i32,
    ) -> Result<ContactPerson, AppError> {
        let (person, products) = repo.get_by_id(id).await?.ok_or_else(|| {
            AppError::NotFound("Ansprechpartner nicht gefunden.".to_string())
        })?;

        Ok(ContactPerson::from_entity(person, products))
    }

    async fn validate(&self, params: &SaveContactPersonParams) -> Result<(), AppError> {
        validate::person(&params.person)?;

        if LocationRepository::new(self.db)
            .get_by_id(params.location_id)
            .await?
            .is_none()
        {
            return Err(ValidationError::UnknownReference("Standort").into());
        }

        let existing = SoftwareProductRepository::new(self.db)
            .count_existing(&params.product_ids)
            .await?;
        if existing != params.product_ids.len() as u64 {
            return Err(ValidationError::UnknownReference("Produkt").into());
        }

        Ok(())
    }
}
