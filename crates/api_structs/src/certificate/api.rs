use crate::dtos::CertificateDTO;
use chrono::NaiveDate;
use enterprise_planner_domain::{Certificate, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateResponse {
    pub certificate: CertificateDTO,
}

impl CertificateResponse {
    pub fn new(certificate: Certificate) -> Self {
        Self {
            certificate: CertificateDTO::new(certificate),
        }
    }
}

pub mod create_certificate {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        #[serde(default)]
        pub issuer: Option<String>,
        #[serde(default)]
        pub issued_date: Option<NaiveDate>,
        #[serde(default, rename = "type")]
        pub certificate_type: Option<String>,
        #[serde(default)]
        pub expiry_date: Option<NaiveDate>,
        #[serde(default)]
        pub reminder_days: Option<i64>,
        #[serde(default)]
        pub description: Option<String>,
    }

    pub type APIResponse = CertificateResponse;
}

pub mod get_certificates {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub certificates: Vec<CertificateDTO>,
    }

    impl APIResponse {
        pub fn new(certificates: Vec<Certificate>) -> Self {
            Self {
                certificates: certificates.into_iter().map(CertificateDTO::new).collect(),
            }
        }
    }
}

pub mod delete_certificate {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub certificate_id: ID,
    }

    pub type APIResponse = CertificateResponse;
}

pub mod update_certificate {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub certificate_id: ID,
    }

    pub type RequestBody = super::create_certificate::RequestBody;

    pub type APIResponse = CertificateResponse;
}
