use crate::server::data::used_software_product::UsedSoftwareProductRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_for_product_at;
mod get_list;
mod set_version;
