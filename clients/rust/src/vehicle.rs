use crate::{APIResponse, BaseClient, ID};
use enterprise_planner_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct VehicleClient {
    base: Arc<BaseClient>,
}

pub type CreateVehicleInput = create_vehicle::RequestBody;
pub type CompleteVehicleInspectionInput = complete_vehicle_inspection::RequestBody;

pub struct UpdateVehicleInput {
    pub vehicle_id: ID,
    pub update: update_vehicle::RequestBody,
}

impl VehicleClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateVehicleInput,
    ) -> APIResponse<create_vehicle::APIResponse> {
        self.base
            .post(input, "vehicles".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get_all(&self) -> APIResponse<get_vehicles::APIResponse> {
        self.base.get("vehicles".into(), StatusCode::OK).await
    }

    pub async fn update(&self, input: UpdateVehicleInput) -> APIResponse<update_vehicle::APIResponse> {
        self.base
            .put(
                input.update,
                format!("vehicles/{}", input.vehicle_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, vehicle_id: &ID) -> APIResponse<delete_vehicle::APIResponse> {
        self.base
            .delete(format!("vehicles/{}", vehicle_id), StatusCode::OK)
            .await
    }

    pub async fn complete_inspection(
        &self,
        input: CompleteVehicleInspectionInput,
    ) -> APIResponse<complete_vehicle_inspection::APIResponse> {
        self.base
            .post(input, "vehicle-inspections/complete".into(), StatusCode::OK)
            .await
    }
}
