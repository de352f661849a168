use crate::{
    error::PlannerError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use enterprise_planner_api_structs::delete_vehicle::*;
use enterprise_planner_domain::{Vehicle, ID};
use enterprise_planner_infra::PlannerContext;

fn handle_error(e: UseCaseError) -> PlannerError {
    match e {
        UseCaseError::NotFound(vehicle_id) => PlannerError::NotFound(format!(
            "The vehicle with id: {}, was not found.",
            vehicle_id
        )),
        UseCaseError::StorageError => PlannerError::InternalError,
    }
}

pub async fn delete_vehicle_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    let usecase = DeleteVehicleUseCase {
        vehicle_id: path.vehicle_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|vehicle| HttpResponse::Ok().json(APIResponse::new(vehicle)))
        .map_err(handle_error)
}

#[derive(Debug)]
struct DeleteVehicleUseCase {
    pub vehicle_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteVehicleUseCase {
    type Response = Vehicle;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteVehicle";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.vehicles.delete(&self.vehicle_id).await {
            Ok(Some(vehicle)) => Ok(vehicle),
            Ok(None) => Err(UseCaseError::NotFound(self.vehicle_id.clone())),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
