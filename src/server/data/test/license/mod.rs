use crate::server::data::license::LicenseRepository;
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod count_covering;
mod end_and_clear_replacement;
mod get_customer_product_ids;
mod get_list;
