//! Contact person and customer adviser models.
//!
//! Both share the same four person fields, kept in `PersonFields` so they are
//! validated in one place.

use crate::model::{
    person::{AdviserDto, ContactPersonDto, SaveAdviserDto, SaveContactPersonDto},
    product::ProductRefDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct PersonFields {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub phone_number: String,
}

impl PersonFields {
    fn trimmed(first_name: &str, last_name: &str, email_address: &str, phone_number: &str) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email_address: email_address.trim().to_string(),
            phone_number: phone_number.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveContactPersonParams {
    pub location_id: i32,
    pub person: PersonFields,
    pub product_ids: Vec<i32>,
}

impl SaveContactPersonParams {
    pub fn from_dto(dto: SaveContactPersonDto) -> Self {
        let mut product_ids = dto.product_ids;
        product_ids.sort_unstable();
        product_ids.dedup();

        Self {
            location_id: dto.location_id,
            person: PersonFields::trimmed(
                &dto.first_name,
                &dto.last_name,
                &dto.email_address,
                &dto.phone_number,
            ),
            product_ids,
        }
    }
}

/// Product a contact person is responsible for.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRef {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactPerson {
    pub id: i32,
    pub location_id: i32,
    pub person: PersonFields,
    pub products: Vec<ProductRef>,
}

impl ContactPerson {
    pub fn from_entity(
        entity: entity::contact_person::Model,
        products: Vec<entity::software_product::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            location_id: entity.location_id,
            person: PersonFields {
                first_name: entity.first_name,
                last_name: entity.last_name,
                email_address: entity.email_address,
                phone_number: entity.phone_number,
            },
            products: products
                .into_iter()
                .map(|p| ProductRef {
                    id: p.id,
                    name: p.name,
                })
                .collect(),
        }
    }

    pub fn into_dto(self) -> ContactPersonDto {
        ContactPersonDto {
            id: self.id,
            location_id: self.location_id,
            first_name: self.person.first_name,
            last_name: self.person.last_name,
            email_address: self.person.email_address,
            phone_number: self.person.phone_number,
            products: self
                .products
                .into_iter()
                .map(|p| ProductRefDto {
                    id: p.id,
                    name: p.name,
                })
                .collect(),
        }
    }
}

pub fn adviser_params_from_dto(dto: SaveAdviserDto) -> PersonFields {
    PersonFields::trimmed(
        &dto.first_name,
        &dto.last_name,
        &dto.email_address,
        &dto.phone_number,
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct Adviser {
    pub id: i32,
    pub person: PersonFields,
}

impl Adviser {
    pub fn from_entity(entity: entity::customer_adviser::Model) -> Self {
        Self {
            id: entity.id,
            person: PersonFields {
                first_name: entity.first_name,
                last_name: entity.last_name,
                email_address: entity.email_address,
                phone_number: entity.phone_number,
            },
        }
    }

    pub fn into_dto(self) -> AdviserDto {
        AdviserDto {
            id: self.id,
            first_name: self.person.first_name,
            last_name: self.person.last_name,
            email_address: self.person.email_address,
            phone_number: self.person.phone_number,
        }
    }
}
