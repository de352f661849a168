use crate::{APIResponse, BaseClient, ID};
use enterprise_planner_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct EmployeeClient {
    base: Arc<BaseClient>,
}

pub type CreateEmployeeInput = create_employee::RequestBody;

pub struct UpdateEmployeeInput {
    pub employee_id: ID,
    pub update: update_employee::RequestBody,
}

impl EmployeeClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateEmployeeInput) -> APIResponse<create_employee::APIResponse> {
        self.base
            .post(input, "employees".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get_all(&self) -> APIResponse<get_employees::APIResponse> {
        self.base.get("employees".into(), StatusCode::OK).await
    }

    pub async fn update(&self, input: UpdateEmployeeInput) -> APIResponse<update_employee::APIResponse> {
        self.base
            .put(
                input.update,
                format!("employees/{}", input.employee_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, employee_id: &ID) -> APIResponse<delete_employee::APIResponse> {
        self.base
            .delete(format!("employees/{}", employee_id), StatusCode::OK)
            .await
    }
}
