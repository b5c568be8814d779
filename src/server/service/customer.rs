use sea_orm::DatabaseConnection;

use crate::server::{
    data::{customer::CustomerRepository, location::LocationRepository},
    error::{validation::ValidationError, AppError},
    model::{
        customer::{
            Customer, CustomerListItem, CustomerWithLocations, PaginatedCustomers,
            SaveCustomerParams,
        },
        location::Location,
        total_pages,
    },
    util::validate,
};

const CUSTOMER_NUMBER_MAX: usize = 32;
const NAME_MAX: usize = 64;

pub struct CustomerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of customers ordered by name, with location counts.
    pub async fn list(&self, page: u64, per_page: u64) -> Result<PaginatedCustomers, AppError> {
        let repo = CustomerRepository::new(self.db);

        let (customers, total) = repo.get_paginated(page, per_page).await?;

        Ok(PaginatedCustomers {
            customers: customers
                .into_iter()
                .map(|(customer, location_count)| CustomerListItem {
                    customer: Customer::from_entity(customer),
                    location_count,
                })
                .collect(),
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Gets a customer with its locations.
    pub async fn get(&self, id: i32) -> Result<CustomerWithLocations, AppError> {
        let customer = CustomerRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Kunde nicht gefunden.".to_string()))?;

        let locations = LocationRepository::new(self.db)
            .get_by_customer(id)
            .await?
            .into_iter()
            .map(Location::from_entity)
            .collect();

        Ok(CustomerWithLocations {
            customer: Customer::from_entity(customer),
            locations,
        })
    }

    pub async fn create(&self, params: SaveCustomerParams) -> Result<Customer, AppError> {
        self.validate(&params, None).await?;

        let customer = CustomerRepository::new(self.db).create(params).await?;

        tracing::info!("Created customer {} ({})", customer.id, customer.customer_number);

        Ok(Customer::from_entity(customer))
    }

    pub async fn update(&self, id: i32, params: SaveCustomerParams) -> Result<Customer, AppError> {
        self.validate(&params, Some(id)).await?;

        let customer = CustomerRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Kunde nicht gefunden.".to_string()))?;

        Ok(Customer::from_entity(customer))
    }

    /// Deletes a customer and everything that belongs to it.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CustomerRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Kunde nicht gefunden.".to_string()));
        }

        tracing::info!("Deleted customer {}", id);

        Ok(())
    }

    /// Finds customers by number or name, see `CustomerRepository::filter`.
    pub async fn filter(&self, word: &str, contains: bool) -> Result<Vec<Customer>, AppError> {
        let customers = CustomerRepository::new(self.db)
            .filter(word.trim(), contains)
            .await?;

        Ok(customers.into_iter().map(Customer::from_entity).collect())
    }

    async fn validate(
        &self,
        params: &SaveCustomerParams,
        id: Option<i32>,
    ) -> Result<(), AppError> {
        validate::required(&params.customer_number, "Kundennummer", CUSTOMER_NUMBER_MAX)?;
        validate::required(&params.name, "Name", NAME_MAX)?;

        if CustomerRepository::new(self.db)
            .number_taken(&params.customer_number, id)
            .await?
        {
            return Err(ValidationError::Taken("Diese Kundennummer").into());
        }

        Ok(())
    }
}
