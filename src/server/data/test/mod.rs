mod contact_person;
mod customer;
mod heartbeat;
mod license;
mod software_update;
mod used_software_product;
mod user;
