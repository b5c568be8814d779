use crate::server::{
    data::contact_person::ContactPersonRepository,
    model::person::{PersonFields, SaveContactPersonParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod update;

fn params(location_id: i32, product_ids: Vec<i32>) -> SaveContactPersonParams {
    SaveContactPersonParams {
        location_id,
        person: PersonFields {
            first_name: "Erika".to_string(),
            last_name: "Mustermann".to_string(),
            email_address: "erika@example.com".to_string(),
            phone_number: "0621 4711".to_string(),
        },
        product_ids,
    }
}
