use crate::dtos::VehicleDTO;
use chrono::NaiveDate;
use enterprise_planner_domain::{Vehicle, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub vehicle: VehicleDTO,
}

impl VehicleResponse {
    pub fn new(vehicle: Vehicle) -> Self {
        Self {
            vehicle: VehicleDTO::new(vehicle),
        }
    }
}

pub mod create_vehicle {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub plate: String,
        #[serde(rename = "type")]
        pub vehicle_type: String,
        #[serde(default)]
        pub model: Option<String>,
        #[serde(default)]
        pub year: Option<i32>,
        #[serde(default)]
        pub tuv_date: Option<NaiveDate>,
        #[serde(default)]
        pub au_date: Option<NaiveDate>,
        #[serde(default)]
        pub uvv_date: Option<NaiveDate>,
        #[serde(default)]
        pub tachograph_last_read: Option<NaiveDate>,
        #[serde(default)]
        pub tachograph_next_read: Option<NaiveDate>,
        #[serde(default)]
        pub tachograph_last_check: Option<NaiveDate>,
        #[serde(default)]
        pub tachograph_next_check: Option<NaiveDate>,
    }

    pub type APIResponse = VehicleResponse;
}

pub mod get_vehicles {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub vehicles: Vec<VehicleDTO>,
    }

    impl APIResponse {
        pub fn new(vehicles: Vec<Vehicle>) -> Self {
            Self {
                vehicles: vehicles.into_iter().map(VehicleDTO::new).collect(),
            }
        }
    }
}

pub mod delete_vehicle {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub vehicle_id: ID,
    }

    pub type APIResponse = VehicleResponse;
}

pub mod complete_vehicle_inspection {
    use super::*;
    use enterprise_planner_domain::InspectionKind;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        /// The reminder task to complete along with the inspection
        #[serde(default)]
        pub task_id: Option<ID>,
        pub vehicle_id: ID,
        pub inspection_type: InspectionKind,
        pub completed_date: NaiveDate,
        pub validity_months: u32,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub message: String,
        pub next_due_date: NaiveDate,
        pub vehicle: VehicleDTO,
    }

    impl APIResponse {
        pub fn new(inspection: InspectionKind, next_due_date: NaiveDate, vehicle: Vehicle) -> Self {
            Self {
                message: format!(
                    "{} wurde als erledigt markiert und nächstes Fälligkeitsdatum auf {} gesetzt",
                    inspection.label(),
                    next_due_date.format("%Y-%m-%d")
                ),
                next_due_date,
                vehicle: VehicleDTO::new(vehicle),
            }
        }
    }
}

pub mod update_vehicle {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub vehicle_id: ID,
    }

    /// All editable fields are replaced, like on creation
    pub type RequestBody = super::create_vehicle::RequestBody;

    pub type APIResponse = VehicleResponse;
}
