use crate::{
    error::PlannerError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use enterprise_planner_api_structs::get_tasks::*;
use enterprise_planner_domain::Task;
use enterprise_planner_infra::PlannerContext;

pub async fn get_tasks_controller(
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    execute(GetTasksUseCase {}, &ctx)
        .await
        .map(|tasks| HttpResponse::Ok().json(APIResponse::new(tasks)))
        .map_err(|e| match e {
            UseCaseError::StorageError => PlannerError::InternalError,
        })
}

#[derive(Debug)]
struct GetTasksUseCase {}

#[derive(Debug)]
enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetTasksUseCase {
    type Response = Vec<Task>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetTasks";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .tasks
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
