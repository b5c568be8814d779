use crate::{
    model::dashboard::DashboardDto,
    server::model::{heartbeat::HeartbeatCounts, license::LicenseCounts, update::UpdateCounts},
};

/// Counts shown on the start page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dashboard {
    pub heartbeats: HeartbeatCounts,
    pub licenses: LicenseCounts,
    pub updates: UpdateCounts,
}

impl Dashboard {
    pub fn into_dto(self) -> DashboardDto {
        DashboardDto {
            heartbeats: self.heartbeats.into_dto(),
            licenses: self.licenses.into_dto(),
            updates: self.updates.into_dto(),
        }
    }
}
