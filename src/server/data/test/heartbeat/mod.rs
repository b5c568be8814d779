use crate::server::data::heartbeat::HeartbeatRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_latest_received;
