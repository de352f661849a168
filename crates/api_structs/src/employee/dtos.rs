use chrono::{DateTime, NaiveDate, Utc};
use enterprise_planner_domain::{date::deserialize_optional_date, DrivingLicense, Employee, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DrivingLicenseDTO {
    pub class: String,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub expiry: Option<NaiveDate>,
}

impl From<DrivingLicense> for DrivingLicenseDTO {
    fn from(license: DrivingLicense) -> Self {
        Self {
            class: license.class,
            expiry: license.expiry,
        }
    }
}

impl From<DrivingLicenseDTO> for DrivingLicense {
    fn from(license: DrivingLicenseDTO) -> Self {
        Self {
            class: license.class,
            expiry: license.expiry,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDTO {
    pub id: ID,
    pub name: String,
    pub position: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub hire_date: Option<NaiveDate>,
    /// `None` when the stored license list could not be read
    pub driving_licenses: Option<Vec<DrivingLicenseDTO>>,
    pub driver_card_read: Option<NaiveDate>,
    pub first_aid: Option<NaiveDate>,
    pub safety: Option<NaiveDate>,
    pub forklift: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl EmployeeDTO {
    pub fn new(employee: Employee) -> Self {
        let driving_licenses = employee
            .driving_licenses()
            .ok()
            .map(|licenses| licenses.into_iter().map(DrivingLicenseDTO::from).collect());
        Self {
            id: employee.id,
            name: employee.name,
            position: employee.position,
            department: employee.department,
            email: employee.email,
            phone: employee.phone,
            hire_date: employee.hire_date,
            driving_licenses,
            driver_card_read: employee.driver_card_read,
            first_aid: employee.first_aid,
            safety: employee.safety,
            forklift: employee.forklift,
            created_at: employee.created_at,
        }
    }
}
