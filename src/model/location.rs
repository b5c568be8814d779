use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::person::{AdviserDto, ContactPersonDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationDto {
    pub id: i32,
    pub customer_id: i32,
    pub adviser_id: Option<i32>,
    pub name: String,
    pub email_address: String,
    pub phone_number: String,
    pub street: String,
    pub house_number: String,
    pub postcode: String,
    pub city: String,
}

/// Location together with its adviser and contact persons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationDetailDto {
    #[serde(flatten)]
    pub location: LocationDto,
    pub adviser: Option<AdviserDto>,
    pub contact_persons: Vec<ContactPersonDto>,
}

/// Location found by name, enriched with the owning customer's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationMatchDto {
    pub id: i32,
    pub name: String,
    pub postcode: String,
    pub city: String,
    pub customer_id: i32,
    pub customer_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SaveLocationDto {
    pub customer_id: i32,
    pub adviser_id: Option<i32>,
    pub name: String,
    pub email_address: String,
    pub phone_number: String,
    pub street: String,
    pub house_number: String,
    pub postcode: String,
    pub city: String,
}
