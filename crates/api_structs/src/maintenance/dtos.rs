use chrono::{DateTime, NaiveDate, Utc};
use enterprise_planner_domain::{MaintenanceRecord, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecordDTO {
    pub id: ID,
    pub vehicle_id: Option<ID>,
    pub object: String,
    #[serde(rename = "type")]
    pub maintenance_type: Option<String>,
    pub last_maintenance: Option<NaiveDate>,
    pub next_maintenance: Option<NaiveDate>,
    pub interval: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl MaintenanceRecordDTO {
    pub fn new(record: MaintenanceRecord) -> Self {
        Self {
            id: record.id,
            vehicle_id: record.vehicle_id,
            object: record.object,
            maintenance_type: record.maintenance_type,
            last_maintenance: record.last_maintenance,
            next_maintenance: record.next_maintenance,
            interval: record.interval,
            description: record.description,
            notes: record.notes,
            created_by: record.created_by,
            created_at: record.created_at,
        }
    }
}
