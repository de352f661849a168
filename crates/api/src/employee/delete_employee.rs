use crate::{
    error::PlannerError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use enterprise_planner_api_structs::delete_employee::*;
use enterprise_planner_domain::{Employee, ID};
use enterprise_planner_infra::PlannerContext;

fn handle_error(e: UseCaseError) -> PlannerError {
    match e {
        UseCaseError::NotFound(employee_id) => PlannerError::NotFound(format!(
            "The employee with id: {}, was not found.",
            employee_id
        )),
        UseCaseError::StorageError => PlannerError::InternalError,
    }
}

pub async fn delete_employee_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    let usecase = DeleteEmployeeUseCase {
        employee_id: path.employee_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|employee| HttpResponse::Ok().json(APIResponse::new(employee)))
        .map_err(handle_error)
}

#[derive(Debug)]
struct DeleteEmployeeUseCase {
    pub employee_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteEmployeeUseCase {
    type Response = Employee;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteEmployee";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.employees.delete(&self.employee_id).await {
            Ok(Some(employee)) => Ok(employee),
            Ok(None) => Err(UseCaseError::NotFound(self.employee_id.clone())),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
