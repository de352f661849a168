mod base;
mod certificate;
mod compliance;
mod contract;
mod employee;
mod maintenance;
mod status;
mod task;
mod vehicle;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use certificate::CertificateClient;
pub use certificate::{CreateCertificateInput, UpdateCertificateInput};
use compliance::ComplianceClient;
use contract::ContractClient;
pub use contract::{CreateContractInput, UpdateContractInput};
use employee::EmployeeClient;
pub use employee::{CreateEmployeeInput, UpdateEmployeeInput};
use maintenance::MaintenanceClient;
pub use maintenance::{CreateMaintenanceRecordInput, UpdateMaintenanceRecordInput};
use status::StatusClient;
use std::sync::Arc;
use task::TaskClient;
pub use task::{CreateTaskInput, UpdateTaskInput};
use vehicle::VehicleClient;
pub use vehicle::{CompleteVehicleInspectionInput, CreateVehicleInput, UpdateVehicleInput};

pub use enterprise_planner_api_structs::dtos::*;
pub use enterprise_planner_api_structs::update_task::RequestBody as TaskUpdate;
pub use enterprise_planner_domain::{
    ComplianceArea, ComplianceStatus, InspectionKind, RecurringInterval, TaskCategory,
    TaskPriority, TaskStatus, ID,
};

/// Enterprise Planner SDK
///
/// Typed client for the HTTP API of the enterprise planner server.
#[derive(Clone)]
pub struct PlannerSDK {
    pub certificate: CertificateClient,
    pub compliance: ComplianceClient,
    pub contract: ContractClient,
    pub employee: EmployeeClient,
    pub maintenance: MaintenanceClient,
    pub status: StatusClient,
    pub task: TaskClient,
    pub vehicle: VehicleClient,
}

impl PlannerSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));

        Self {
            certificate: CertificateClient::new(base.clone()),
            compliance: ComplianceClient::new(base.clone()),
            contract: ContractClient::new(base.clone()),
            employee: EmployeeClient::new(base.clone()),
            maintenance: MaintenanceClient::new(base.clone()),
            status: StatusClient::new(base.clone()),
            task: TaskClient::new(base.clone()),
            vehicle: VehicleClient::new(base),
        }
    }
}
