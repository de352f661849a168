use crate::{
    error::PlannerError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use enterprise_planner_api_structs::get_maintenance_records::*;
use enterprise_planner_domain::MaintenanceRecord;
use enterprise_planner_infra::PlannerContext;

pub async fn get_maintenance_records_controller(
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    execute(GetMaintenanceRecordsUseCase {}, &ctx)
        .await
        .map(|records| HttpResponse::Ok().json(APIResponse::new(records)))
        .map_err(|e| match e {
            UseCaseError::StorageError => PlannerError::InternalError,
        })
}

#[derive(Debug)]
struct GetMaintenanceRecordsUseCase {}

#[derive(Debug)]
enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetMaintenanceRecordsUseCase {
    type Response = Vec<MaintenanceRecord>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetMaintenanceRecords";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .maintenance
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
