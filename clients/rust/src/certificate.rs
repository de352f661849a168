use crate::{APIResponse, BaseClient, ID};
use enterprise_planner_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct CertificateClient {
    base: Arc<BaseClient>,
}

pub type CreateCertificateInput = create_certificate::RequestBody;

pub struct UpdateCertificateInput {
    pub certificate_id: ID,
    pub update: update_certificate::RequestBody,
}

impl CertificateClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateCertificateInput) -> APIResponse<create_certificate::APIResponse> {
        self.base
            .post(input, "certificates".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get_all(&self) -> APIResponse<get_certificates::APIResponse> {
        self.base.get("certificates".into(), StatusCode::OK).await
    }

    pub async fn update(&self, input: UpdateCertificateInput) -> APIResponse<update_certificate::APIResponse> {
        self.base
            .put(
                input.update,
                format!("certificates/{}", input.certificate_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, certificate_id: &ID) -> APIResponse<delete_certificate::APIResponse> {
        self.base
            .delete(format!("certificates/{}", certificate_id), StatusCode::OK)
            .await
    }
}
