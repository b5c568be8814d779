//! Customer domain models and parameters.

use crate::{
    model::customer::{
        CustomerDetailDto, CustomerDto, CustomerListItemDto, PaginatedCustomersDto,
        SaveCustomerDto,
    },
    server::model::location::Location,
};

/// Parameters for creating or updating a customer.
#[derive(Debug, Clone)]
pub struct SaveCustomerParams {
    pub customer_number: String,
    pub name: String,
}

impl SaveCustomerParams {
    pub fn from_dto(dto: SaveCustomerDto) -> Self {
        Self {
            customer_number: dto.customer_number.trim().to_string(),
            name: dto.name.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: i32,
    pub customer_number: String,
    pub name: String,
}

impl Customer {
    pub fn from_entity(entity: entity::customer::Model) -> Self {
        Self {
            id: entity.id,
            customer_number: entity.customer_number,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> CustomerDto {
        CustomerDto {
            id: self.id,
            customer_number: self.customer_number,
            name: self.name,
        }
    }
}

/// Customer row of the paginated list.
#[derive(Debug, Clone)]
pub struct CustomerListItem {
    pub customer: Customer,
    pub location_count: u64,
}

#[derive(Debug, Clone)]
pub struct PaginatedCustomers {
    pub customers: Vec<CustomerListItem>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedCustomers {
    pub fn into_dto(self) -> PaginatedCustomersDto {
        PaginatedCustomersDto {
            customers: self
                .customers
                .into_iter()
                .map(|item| CustomerListItemDto {
                    id: item.customer.id,
                    customer_number: item.customer.customer_number,
                    name: item.customer.name,
                    location_count: item.location_count,
                })
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CustomerWithLocations {
    pub customer: Customer,
    pub locations: Vec<Location>,
}

impl CustomerWithLocations {
    pub fn into_dto(self) -> CustomerDetailDto {
        CustomerDetailDto {
            id: self.customer.id,
            customer_number: self.customer.customer_number,
            name: self.customer.name,
            locations: self.locations.into_iter().map(Location::into_dto).collect(),
        }
    }
}
