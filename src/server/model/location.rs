//! Location domain models and parameters.

use crate::{
    model::location::{LocationDetailDto, LocationDto, LocationMatchDto, SaveLocationDto},
    server::model::person::{Adviser, ContactPerson},
};

#[derive(Debug, Clone)]
pub struct SaveLocationParams {
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

impl SaveLocationParams {
    pub fn from_dto(dto: SaveLocationDto) -> Self {
        Self {
            customer_id: dto.customer_id,
            adviser_id: dto.adviser_id,
            name: dto.name.trim().to_string(),
            email_address: dto.email_address.trim().to_string(),
            phone_number: dto.phone_number.trim().to_string(),
            street: dto.street.trim().to_string(),
            house_number: dto.house_number.trim().to_string(),
            postcode: dto.postcode.trim().to_string(),
            city: dto.city.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
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

impl Location {
    pub fn from_entity(entity: entity::location::Model) -> Self {
        Self {
            id: entity.id,
            customer_id: entity.customer_id,
            adviser_id: entity.adviser_id,
            name: entity.name,
            email_address: entity.email_address,
            phone_number: entity.phone_number,
            street: entity.street,
            house_number: entity.house_number,
            postcode: entity.postcode,
            city: entity.city,
        }
    }

    pub fn into_dto(self) -> LocationDto {
        LocationDto {
            id: self.id,
            customer_id: self.customer_id,
            adviser_id: self.adviser_id,
            name: self.name,
            email_address: self.email_address,
            phone_number: self.phone_number,
            street: self.street,
            house_number: self.house_number,
            postcode: self.postcode,
            city: self.city,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LocationDetail {
    pub location: Location,
    pub adviser: Option<Adviser>,
    pub contact_persons: Vec<ContactPerson>,
}

impl LocationDetail {
    pub fn into_dto(self) -> LocationDetailDto {
        LocationDetailDto {
            location: self.location.into_dto(),
            adviser: self.adviser.map(Adviser::into_dto),
            contact_persons: self
                .contact_persons
                .into_iter()
                .map(ContactPerson::into_dto)
                .collect(),
        }
    }
}

/// Location matched by name search.
#[derive(Debug, Clone)]
pub struct LocationMatch {
    pub location: Location,
    pub customer_name: String,
}

impl LocationMatch {
    pub fn into_dto(self) -> LocationMatchDto {
        LocationMatchDto {
            id: self.location.id,
            name: self.location.name,
            postcode: self.location.postcode,
            city: self.location.city,
            customer_id: self.location.customer_id,
            customer_name: self.customer_name,
        }
    }
}
