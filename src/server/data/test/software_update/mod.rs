use crate::server::data::software_update::SoftwareUpdateRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_product;
mod get_latest_release_dates;
