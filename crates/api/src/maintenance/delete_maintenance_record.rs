use crate::{
    error::PlannerError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use enterprise_planner_api_structs::delete_maintenance_record::*;
use enterprise_planner_domain::{MaintenanceRecord, ID};
use enterprise_planner_infra::PlannerContext;

fn handle_error(e: UseCaseError) -> PlannerError {
    match e {
        UseCaseError::NotFound(maintenance_id) => PlannerError::NotFound(format!(
            "The maintenance record with id: {}, was not found.",
            maintenance_id
        )),
        UseCaseError::StorageError => PlannerError::InternalError,
    }
}

pub async fn delete_maintenance_record_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    let usecase = DeleteMaintenanceRecordUseCase {
        maintenance_id: path.maintenance_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|record| HttpResponse::Ok().json(APIResponse::new(record)))
        .map_err(handle_error)
}

#[derive(Debug)]
struct DeleteMaintenanceRecordUseCase {
    pub maintenance_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteMaintenanceRecordUseCase {
    type Response = MaintenanceRecord;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteMaintenanceRecord";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.maintenance.delete(&self.maintenance_id).await {
            Ok(Some(record)) => Ok(record),
            Ok(None) => Err(UseCaseError::NotFound(self.maintenance_id.clone())),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
