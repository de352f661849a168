use crate::dtos::ContractDTO;
use chrono::NaiveDate;
use enterprise_planner_domain::{Contract, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractResponse {
    pub contract: ContractDTO,
}

impl ContractResponse {
    pub fn new(contract: Contract) -> Self {
        Self {
            contract: ContractDTO::new(contract),
        }
    }
}

pub mod create_contract {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub partner: String,
        #[serde(rename = "type")]
        pub contract_type: String,
        #[serde(default)]
        pub start_date: Option<NaiveDate>,
        #[serde(default)]
        pub end_date: Option<NaiveDate>,
        #[serde(default)]
        pub cancelation_period: Option<String>,
        #[serde(default)]
        pub reminder_days: Option<i64>,
        #[serde(default)]
        pub notes: Option<String>,
    }

    pub type APIResponse = ContractResponse;
}

pub mod get_contracts {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub contracts: Vec<ContractDTO>,
    }

    impl APIResponse {
        pub fn new(contracts: Vec<Contract>) -> Self {
            Self {
                contracts: contracts.into_iter().map(ContractDTO::new).collect(),
            }
        }
    }
}

pub mod delete_contract {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub contract_id: ID,
    }

    pub type APIResponse = ContractResponse;
}

pub mod update_contract {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub contract_id: ID,
    }

    /// All editable fields are replaced, like on creation
    pub type RequestBody = super::create_contract::RequestBody;

    pub type APIResponse = ContractResponse;
}
