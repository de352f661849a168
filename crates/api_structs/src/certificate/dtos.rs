use chrono::{DateTime, NaiveDate, Utc};
use enterprise_planner_domain::{Certificate, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CertificateDTO {
    pub id: ID,
    pub name: String,
    pub issuer: Option<String>,
    pub issued_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub certificate_type: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub reminder_days: i64,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CertificateDTO {
    pub fn new(certificate: Certificate) -> Self {
        Self {
            reminder_days: certificate.reminder_days(),
            id: certificate.id,
            name: certificate.name,
            issuer: certificate.issuer,
            issued_date: certificate.issued_date,
            certificate_type: certificate.certificate_type,
            expiry_date: certificate.expiry_date,
            description: certificate.description,
            created_at: certificate.created_at,
        }
    }
}
