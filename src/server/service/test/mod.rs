use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::error::{validation::ValidationError, AppError};

mod customer;
mod customer_adviser;
mod license;
mod license_heartbeat;
mod location;
mod software_module;
mod user;
