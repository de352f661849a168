use chrono::{DateTime, NaiveDate, Utc};
use enterprise_planner_domain::{Vehicle, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDTO {
    pub id: ID,
    pub plate: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub tuv_date: Option<NaiveDate>,
    pub au_date: Option<NaiveDate>,
    pub uvv_date: Option<NaiveDate>,
    pub tachograph_last_read: Option<NaiveDate>,
    pub tachograph_next_read: Option<NaiveDate>,
    pub tachograph_last_check: Option<NaiveDate>,
    pub tachograph_next_check: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl VehicleDTO {
    pub fn new(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            plate: vehicle.plate,
            vehicle_type: vehicle.vehicle_type,
            model: vehicle.model,
            year: vehicle.year,
            tuv_date: vehicle.tuv_date,
            au_date: vehicle.au_date,
            uvv_date: vehicle.uvv_date,
            tachograph_last_read: vehicle.tachograph_last_read,
            tachograph_next_read: vehicle.tachograph_next_read,
            tachograph_last_check: vehicle.tachograph_last_check,
            tachograph_next_check: vehicle.tachograph_next_check,
            created_at: vehicle.created_at,
        }
    }
}
