use crate::{APIResponse, BaseClient};
use enterprise_planner_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ComplianceClient {
    base: Arc<BaseClient>,
}

impl ComplianceClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Runs a compliance sweep right away
    pub async fn run_check(&self) -> APIResponse<run_compliance_check::APIResponse> {
        self.base
            .post((), "compliance/check".into(), StatusCode::OK)
            .await
    }

    pub async fn get_employees_compliance(
        &self,
    ) -> APIResponse<get_employees_compliance::APIResponse> {
        self.base
            .get("employees/compliance".into(), StatusCode::OK)
            .await
    }
}
