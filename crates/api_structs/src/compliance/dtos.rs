use chrono::NaiveDate;
use enterprise_planner_domain::{
    CheckOutcome, ComplianceArea, ComplianceStatus, EmployeeComplianceReport, SweepReport, ID,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutcomeDTO {
    pub area: ComplianceArea,
    pub tasks_created: usize,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl CheckOutcomeDTO {
    pub fn new(outcome: CheckOutcome) -> Self {
        Self {
            area: outcome.area,
            tasks_created: outcome.tasks_created,
            error: outcome.error,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SweepReportDTO {
    pub today: NaiveDate,
    pub tasks_created: usize,
    pub outcomes: Vec<CheckOutcomeDTO>,
}

impl SweepReportDTO {
    pub fn new(report: SweepReport) -> Self {
        Self {
            today: report.today,
            tasks_created: report.tasks_created,
            outcomes: report
                .outcomes
                .into_iter()
                .map(CheckOutcomeDTO::new)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeComplianceDTO {
    pub id: ID,
    pub name: String,
    pub issues: Vec<String>,
    pub critical_count: usize,
    pub warning_count: usize,
    pub status: ComplianceStatus,
}

impl EmployeeComplianceDTO {
    pub fn new(report: EmployeeComplianceReport) -> Self {
        Self {
            id: report.id,
            name: report.name,
            issues: report.issues,
            critical_count: report.critical_count,
            warning_count: report.warning_count,
            status: report.status,
        }
    }
}
