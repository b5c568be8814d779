use crate::server::{data::customer::CustomerRepository, model::customer::SaveCustomerParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod filter;
mod get_paginated;
mod number_taken;
