use crate::{APIResponse, BaseClient, ID};
use enterprise_planner_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct MaintenanceClient {
    base: Arc<BaseClient>,
}

pub type CreateMaintenanceRecordInput = create_maintenance_record::RequestBody;

pub struct UpdateMaintenanceRecordInput {
    pub maintenance_id: ID,
    pub update: update_maintenance_record::RequestBody,
}

impl MaintenanceClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateMaintenanceRecordInput) -> APIResponse<create_maintenance_record::APIResponse> {
        self.base
            .post(input, "maintenance".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get_all(&self) -> APIResponse<get_maintenance_records::APIResponse> {
        self.base.get("maintenance".into(), StatusCode::OK).await
    }

    pub async fn update(&self, input: UpdateMaintenanceRecordInput) -> APIResponse<update_maintenance_record::APIResponse> {
        self.base
            .put(
                input.update,
                format!("maintenance/{}", input.maintenance_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, record_id: &ID) -> APIResponse<delete_maintenance_record::APIResponse> {
        self.base
            .delete(format!("maintenance/{}", record_id), StatusCode::OK)
            .await
    }
}
