use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    heartbeat::HeartbeatCountsDto, license::LicenseCountsDto, update::UpdateCountsDto,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardDto {
    pub heartbeats: HeartbeatCountsDto,
    pub licenses: LicenseCountsDto,
    pub updates: UpdateCountsDto,
}
