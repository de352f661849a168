use crate::dtos::{DrivingLicenseDTO, EmployeeDTO};
use chrono::NaiveDate;
use enterprise_planner_domain::{Employee, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub employee: EmployeeDTO,
}

impl EmployeeResponse {
    pub fn new(employee: Employee) -> Self {
        Self {
            employee: EmployeeDTO::new(employee),
        }
    }
}

pub mod create_employee {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        #[serde(default)]
        pub position: Option<String>,
        #[serde(default)]
        pub department: Option<String>,
        #[serde(default)]
        pub email: Option<String>,
        #[serde(default)]
        pub phone: Option<String>,
        #[serde(default)]
        pub hire_date: Option<NaiveDate>,
        #[serde(default)]
        pub driving_licenses: Vec<DrivingLicenseDTO>,
        #[serde(default)]
        pub driver_card_read: Option<NaiveDate>,
        #[serde(default)]
        pub first_aid: Option<NaiveDate>,
        #[serde(default)]
        pub safety: Option<NaiveDate>,
        #[serde(default)]
        pub forklift: Option<NaiveDate>,
    }

    pub type APIResponse = EmployeeResponse;
}

pub mod get_employees {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub employees: Vec<EmployeeDTO>,
    }

    impl APIResponse {
        pub fn new(employees: Vec<Employee>) -> Self {
            Self {
                employees: employees.into_iter().map(EmployeeDTO::new).collect(),
            }
        }
    }
}

pub mod delete_employee {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub employee_id: ID,
    }

    pub type APIResponse = EmployeeResponse;
}

pub mod update_employee {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub employee_id: ID,
    }

    pub type RequestBody = super::create_employee::RequestBody;

    pub type APIResponse = EmployeeResponse;
}
