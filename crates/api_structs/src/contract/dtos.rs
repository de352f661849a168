use chrono::{DateTime, NaiveDate, Utc};
use enterprise_planner_domain::{Contract, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ContractDTO {
    pub id: ID,
    pub name: String,
    pub partner: String,
    #[serde(rename = "type")]
    pub contract_type: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub cancelation_period: Option<String>,
    pub reminder_days: i64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ContractDTO {
    pub fn new(contract: Contract) -> Self {
        Self {
            reminder_days: contract.reminder_days(),
            id: contract.id,
            name: contract.name,
            partner: contract.partner,
            contract_type: contract.contract_type,
            start_date: contract.start_date,
            end_date: contract.end_date,
            cancelation_period: contract.cancelation_period,
            notes: contract.notes,
            created_at: contract.created_at,
        }
    }
}
