mod certificate;
pub mod compliance;
mod contract;
pub mod date;
mod employee;
mod maintenance;
mod shared;
mod task;
mod vehicle;

pub use certificate::Certificate;
pub use compliance::{
    CheckOutcome, ComplianceArea, ComplianceStatus, DeadlineEvaluation, DeadlineRule,
    DriverCardEvaluation, SweepReport,
};
pub use contract::Contract;
pub use employee::{DrivingLicense, Employee, EmployeeCertificate, EmployeeComplianceReport};
pub use maintenance::{MaintenanceInterval, MaintenanceRecord};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use task::{
    InvalidVariantError, RecurringInterval, Task, TaskCategory, TaskPriority, TaskStatus,
    COMPLIANCE_TASK_CREATOR, RECURRING_TASK_CREATOR,
};
pub use vehicle::{InspectionKind, Vehicle, TRUCK_VEHICLE_TYPE};
