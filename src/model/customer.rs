use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::location::LocationDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CustomerDto {
    pub id: i32,
    pub customer_number: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CustomerListItemDto {
    pub id: i32,
    pub customer_number: String,
    pub name: String,
    pub location_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedCustomersDto {
    pub customers: Vec<CustomerListItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CustomerDetailDto {
    pub id: i32,
    pub customer_number: String,
    pub name: String,
    pub locations: Vec<LocationDto>,
}

/// Request body for creating or updating a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SaveCustomerDto {
    pub customer_number: String,
    pub name: String,
}
