use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        contact_person::ContactPersonRepository, customer::CustomerRepository,
        customer_adviser::CustomerAdviserRepository, license::LicenseRepository,
        location::LocationRepository,
    },
    error::{validation::ValidationError, AppError},
    model::{
        location::{Location, LocationDetail, LocationMatch, SaveLocationParams},
        person::{Adviser, ContactPerson},
    },
    service::used_product::{CoveragePair, UsedProductSync},
    util::validate,
};

const FIELD_MAX: usize = 64;
const HOUSE_NUMBER_MAX: usize = 8;
const POSTCODE_MAX: usize = 16;

pub struct LocationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LocationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_by_customer(&self, customer_id: i32) -> Result<Vec<Location>, AppError> {
        if CustomerRepository::new(self.db)
            .get_by_id(customer_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Kunde nicht gefunden.".to_string()));
        }

        let locations = LocationRepository::new(self.db)
            .get_by_customer(customer_id)
            .await?;

        Ok(locations.into_iter().map(Location::from_entity).collect())
    }

    /// Gets a location with its adviser and contact persons.
    pub async fn get(&self, id: i32) -> Result<LocationDetail, AppError> {
        let location = LocationRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Standort nicht gefunden.".to_string()))?;

        let adviser = match location.adviser_id {
            Some(adviser_id) => CustomerAdviserRepository::new(self.db)
                .get_by_id(adviser_id)
                .await?
                .map(Adviser::from_entity),
            None => None,
        };

        let contact_persons = ContactPersonRepository::new(self.db)
            .get_by_location(id)
            .await?
            .into_iter()
            .map(|(person, products)| ContactPerson::from_entity(person, products))
            .collect();

        Ok(LocationDetail {
            location: Location::from_entity(location),
            adviser,
            contact_persons,
        })
    }

    /// Creates a location.
    ///
    /// The new location is immediately covered by its customer's licenses, so used
    /// products are created for them.
    pub async fn create(&self, params: SaveLocationParams) -> Result<Location, AppError> {
        self.validate(&params).await?;

        let location = LocationRepository::new(self.db).create(params).await?;

        self.sync_customer_products(&location, location.customer_id)
            .await?;

        tracing::info!(
            "Created location {} for customer {}",
            location.id,
            location.customer_id
        );

        Ok(Location::from_entity(location))
    }

    /// Updates a location.
    ///
    /// Moving a location to another customer changes which customer licenses cover it.
    pub async fn update(&self, id: i32, params: SaveLocationParams) -> Result<Location, AppError> {
        self.validate(&params).await?;

        let repo = LocationRepository::new(self.db);
        let previous = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Standort nicht gefunden.".to_string()))?;

        let location = repo
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Standort nicht gefunden.".to_string()))?;

        if previous.customer_id != location.customer_id {
            self.sync_customer_products(&location, previous.customer_id)
                .await?;
            self.sync_customer_products(&location, location.customer_id)
                .await?;
        }

        Ok(Location::from_entity(location))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !LocationRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Standort nicht gefunden.".to_string()));
        }

        tracing::info!("Deleted location {}", id);

        Ok(())
    }

    /// Finds locations by name, each with its customer's name.
    pub async fn filter_by_name(
        &self,
        word: &str,
        contains: bool,
    ) -> Result<Vec<LocationMatch>, AppError> {
        let locations = LocationRepository::new(self.db)
            .filter_by_name(word.trim(), contains)
            .await?;

        Ok(locations
            .into_iter()
            .map(|(location, customer)| LocationMatch {
                location: Location::from_entity(location),
                customer_name: customer.map(|c| c.name).unwrap_or_default(),
            })
            .collect())
    }

    /// Syncs the location against every product licensed to `customer_id` as a whole.
    async fn sync_customer_products(
        &self,
        location: &entity::location::Model,
        customer_id: i32,
    ) -> Result<(), AppError> {
        let product_ids = LicenseRepository::new(self.db)
            .get_customer_product_ids(customer_id)
            .await?;

        let pairs = product_ids
            .into_iter()
            .map(|product_id| CoveragePair {
                location_id: location.id,
                customer_id: location.customer_id,
                product_id,
            })
            .collect();

        UsedProductSync::new(self.db).sync(pairs).await?;

        Ok(())
    }

    async fn validate(&self, params: &SaveLocationParams) -> Result<(), AppError> {
        validate::required(&params.name, "Name", FIELD_MAX)?;
        validate::email(&params.email_address, "E-Mail-Adresse", FIELD_MAX)?;
        validate::required(&params.phone_number, "Telefonnummer", FIELD_MAX)?;
        validate::required(&params.street, "Straße", FIELD_MAX)?;
        validate::required(&params.house_number, "Hausnummer", HOUSE_NUMBER_MAX)?;
        validate::required(&params.postcode, "Postleitzahl", POSTCODE_MAX)?;
        validate::required(&params.city, "Ort", FIELD_MAX)?;

        if CustomerRepository::new(self.db)
            .get_by_id(params.customer_id)
            .await?
            .is_none()
        {
            return Err(ValidationError::UnknownReference("Kunde").into());
        }

        if let Some(adviser_id) = params.adviser_id {
            if CustomerAdviserRepository::new(self.db)
                .get_by_id(adviser_id)
                .await?
                .is_none()
            {
                return Err(ValidationError::UnknownReference("Kundenberater").into());
            }
        }

        Ok(())
    }
}
