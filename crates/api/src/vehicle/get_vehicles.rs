use crate::{
    error::PlannerError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use enterprise_planner_api_structs::get_vehicles::*;
use enterprise_planner_domain::Vehicle;
use enterprise_planner_infra::PlannerContext;

pub async fn get_vehicles_controller(
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    execute(GetVehiclesUseCase {}, &ctx)
        .await
        .map(|vehicles| HttpResponse::Ok().json(APIResponse::new(vehicles)))
        .map_err(|e| match e {
            UseCaseError::StorageError => PlannerError::InternalError,
        })
}

#[derive(Debug)]
struct GetVehiclesUseCase {}

#[derive(Debug)]
enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetVehiclesUseCase {
    type Response = Vec<Vehicle>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetVehicles";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .vehicles
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
