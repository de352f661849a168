use crate::dtos::{CheckOutcomeDTO, EmployeeComplianceDTO, SweepReportDTO};
use chrono::NaiveDate;
use enterprise_planner_domain::{EmployeeComplianceReport, SweepReport};
use serde::{Deserialize, Serialize};

pub mod run_compliance_check {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub message: String,
        pub today: NaiveDate,
        pub tasks_created: usize,
        pub outcomes: Vec<CheckOutcomeDTO>,
    }

    impl APIResponse {
        pub fn new(report: SweepReport) -> Self {
            let report = SweepReportDTO::new(report);
            Self {
                message: format!(
                    "Compliance-Prüfung abgeschlossen: {} neue Aufgaben erstellt",
                    report.tasks_created
                ),
                today: report.today,
                tasks_created: report.tasks_created,
                outcomes: report.outcomes,
            }
        }
    }
}

pub mod get_employees_compliance {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub employees: Vec<EmployeeComplianceDTO>,
    }

    impl APIResponse {
        pub fn new(reports: Vec<EmployeeComplianceReport>) -> Self {
            Self {
                employees: reports
                    .into_iter()
                    .map(EmployeeComplianceDTO::new)
                    .collect(),
            }
        }
    }
}
