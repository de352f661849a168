use crate::dtos::MaintenanceRecordDTO;
use chrono::NaiveDate;
use enterprise_planner_domain::{MaintenanceRecord, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecordResponse {
    pub maintenance: MaintenanceRecordDTO,
}

impl MaintenanceRecordResponse {
    pub fn new(record: MaintenanceRecord) -> Self {
        Self {
            maintenance: MaintenanceRecordDTO::new(record),
        }
    }
}

pub mod create_maintenance_record {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub object: String,
        #[serde(default)]
        pub vehicle_id: Option<ID>,
        #[serde(default, rename = "type")]
        pub maintenance_type: Option<String>,
        #[serde(default)]
        pub last_maintenance: Option<NaiveDate>,
        /// One of "1 Woche", "1 Monat", "3 Monate", "6 Monate" or "1 Jahr"
        #[serde(default)]
        pub interval: Option<String>,
        #[serde(default)]
        pub description: Option<String>,
        #[serde(default)]
        pub notes: Option<String>,
        #[serde(default)]
        pub created_by: Option<String>,
    }

    pub type APIResponse = MaintenanceRecordResponse;
}

pub mod get_maintenance_records {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub maintenance: Vec<MaintenanceRecordDTO>,
    }

    impl APIResponse {
        pub fn new(records: Vec<MaintenanceRecord>) -> Self {
            Self {
                maintenance: records.into_iter().map(MaintenanceRecordDTO::new).collect(),
            }
        }
    }
}

pub mod delete_maintenance_record {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub maintenance_id: ID,
    }

    pub type APIResponse = MaintenanceRecordResponse;
}

pub mod update_maintenance_record {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub maintenance_id: ID,
    }

    /// All editable fields are replaced, like on creation
    pub type RequestBody = super::create_maintenance_record::RequestBody;

    pub type APIResponse = MaintenanceRecordResponse;
}
