use crate::{
    error::PlannerError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use enterprise_planner_api_structs::get_employees::*;
use enterprise_planner_domain::Employee;
use enterprise_planner_infra::PlannerContext;

pub async fn get_employees_controller(
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    execute(GetEmployeesUseCase {}, &ctx)
        .await
        .map(|employees| HttpResponse::Ok().json(APIResponse::new(employees)))
        .map_err(|e| match e {
            UseCaseError::StorageError => PlannerError::InternalError,
        })
}

#[derive(Debug)]
struct GetEmployeesUseCase {}

#[derive(Debug)]
enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEmployeesUseCase {
    type Response = Vec<Employee>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetEmployees";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .employees
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
