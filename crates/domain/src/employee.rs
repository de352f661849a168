use crate::compliance::{
    ComplianceStatus, DeadlineRule, FIRST_AID_RULE, FORKLIFT_LICENSE_RULE, SAFETY_TRAINING_RULE,
};
use crate::date::{days_between, deserialize_optional_date};
use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrivingLicense {
    /// License class, e.g. "C" or "CE"
    pub class: String,
    /// Entries without an expiry date are kept but never checked
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub expiry: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: ID,
    pub name: String,
    pub position: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub hire_date: Option<NaiveDate>,
    /// JSON encoded list of `DrivingLicense`s as it is stored
    pub driving_licenses_json: Option<String>,
    pub driver_card_read: Option<NaiveDate>,
    pub first_aid: Option<NaiveDate>,
    pub safety: Option<NaiveDate>,
    pub forklift: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Employee {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// Certificates every `Employee` may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeCertificate {
    FirstAid,
    Safety,
    Forklift,
}

impl EmployeeCertificate {
    pub const ALL: [EmployeeCertificate; 3] = [Self::FirstAid, Self::Safety, Self::Forklift];

    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstAid => "Erste-Hilfe-Kurs",
            Self::Safety => "Sicherheitsschulung",
            Self::Forklift => "Gabelstaplerschein",
        }
    }

    pub fn rule(&self) -> DeadlineRule {
        match self {
            Self::FirstAid => FIRST_AID_RULE,
            Self::Safety => SAFETY_TRAINING_RULE,
            Self::Forklift => FORKLIFT_LICENSE_RULE,
        }
    }
}

impl Employee {
    pub fn new(name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Default::default(),
            name,
            position: None,
            department: None,
            email: None,
            phone: None,
            hire_date: None,
            driving_licenses_json: None,
            driver_card_read: None,
            first_aid: None,
            safety: None,
            forklift: None,
            created_at,
        }
    }

    /// Decodes the stored driving licenses. No stored value means no licenses.
    pub fn driving_licenses(&self) -> Result<Vec<DrivingLicense>, serde_json::Error> {
        match self.driving_licenses_json.as_deref() {
            None => Ok(Vec::new()),
            Some(json) if json.trim().is_empty() => Ok(Vec::new()),
            Some(json) => serde_json::from_str(json),
        }
    }

    pub fn set_driving_licenses(&mut self, licenses: &[DrivingLicense]) {
        self.driving_licenses_json = if licenses.is_empty() {
            None
        } else {
            serde_json::to_string(licenses).ok()
        };
    }

    pub fn certificate_expiry(&self, certificate: EmployeeCertificate) -> Option<NaiveDate> {
        match certificate {
            EmployeeCertificate::FirstAid => self.first_aid,
            EmployeeCertificate::Safety => self.safety,
            EmployeeCertificate::Forklift => self.forklift,
        }
    }

    /// Whether the employee works as a driver and therefore needs
    /// regular driver card reads
    pub fn is_driver(&self) -> bool {
        let contains = |field: &Option<String>, marker: &str| {
            field
                .as_ref()
                .map(|value| value.to_lowercase().contains(marker))
                .unwrap_or(false)
        };
        contains(&self.position, "fahrer") || contains(&self.department, "transport")
    }
}

/// Summary of all compliance issues of one `Employee`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeComplianceReport {
    pub id: ID,
    pub name: String,
    pub issues: Vec<String>,
    pub critical_count: usize,
    pub warning_count: usize,
    pub status: ComplianceStatus,
}

/// Obligations this far away or closer are reported as warnings
const REPORT_WARNING_DAYS: i64 = 90;
/// Obligations this far away or closer are reported as critical
const REPORT_CRITICAL_DAYS: i64 = 30;
/// Driver cards read longer ago than this are reported as critical.
/// The sweep itself reminds earlier, see `evaluate_driver_card`.
const REPORT_DRIVER_CARD_CRITICAL_DAYS: i64 = 30;
const REPORT_DRIVER_CARD_WARNING_DAYS: i64 = 25;

impl Employee {
    pub fn compliance_report(&self, today: NaiveDate) -> EmployeeComplianceReport {
        let mut report = EmployeeComplianceReport {
            id: self.id.clone(),
            name: self.name.clone(),
            issues: Vec::new(),
            critical_count: 0,
            warning_count: 0,
            status: ComplianceStatus::Ok,
        };

        let licenses = match self.driving_licenses() {
            Ok(licenses) => licenses,
            Err(_) => {
                report.issues.push("Fehler bei der Compliance-Prüfung".into());
                report.status = ComplianceStatus::Error;
                return report;
            }
        };

        let mut check_expiry = |label: String, expiry: NaiveDate| {
            let days_left = days_between(today, expiry);
            if days_left < 0 {
                report
                    .issues
                    .push(format!("{} abgelaufen ({} Tage)", label, days_left.abs()));
                report.critical_count += 1;
            } else if days_left <= REPORT_CRITICAL_DAYS {
                report
                    .issues
                    .push(format!("{} läuft in {} Tagen ab", label, days_left));
                report.critical_count += 1;
            } else if days_left <= REPORT_WARNING_DAYS {
                report
                    .issues
                    .push(format!("{} läuft in {} Tagen ab", label, days_left));
                report.warning_count += 1;
            }
        };

        for license in &licenses {
            if let Some(expiry) = license.expiry {
                check_expiry(format!("Führerschein {}", license.class), expiry);
            }
        }
        for certificate in EmployeeCertificate::ALL.iter() {
            if let Some(expiry) = self.certificate_expiry(*certificate) {
                check_expiry(certificate.label().to_string(), expiry);
            }
        }

        if let Some(last_read) = self.driver_card_read {
            let days_since_read = days_between(last_read, today);
            if days_since_read > REPORT_DRIVER_CARD_CRITICAL_DAYS {
                report.issues.push(format!(
                    "Fahrerkarte muss ausgelesen werden ({} Tage überfällig)",
                    days_since_read - REPORT_DRIVER_CARD_CRITICAL_DAYS
                ));
                report.critical_count += 1;
            } else if days_since_read > REPORT_DRIVER_CARD_WARNING_DAYS {
                report.issues.push(format!(
                    "Fahrerkarte bald auslesen ({} Tage)",
                    REPORT_DRIVER_CARD_CRITICAL_DAYS - days_since_read
                ));
                report.warning_count += 1;
            }
        }

        report.status = if report.critical_count > 0 {
            ComplianceStatus::Critical
        } else if report.warning_count > 0 {
            ComplianceStatus::Warning
        } else {
            ComplianceStatus::Ok
        };
        report
    }
}
