use crate::{
    error::PlannerError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use enterprise_planner_api_structs::delete_task::*;
use enterprise_planner_domain::{Task, ID};
use enterprise_planner_infra::PlannerContext;

fn handle_error(e: UseCaseError) -> PlannerError {
    match e {
        UseCaseError::NotFound(task_id) => {
            PlannerError::NotFound(format!("The task with id: {}, was not found.", task_id))
        }
        UseCaseError::StorageError => PlannerError::InternalError,
    }
}

pub async fn delete_task_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    let usecase = DeleteTaskUseCase {
        task_id: path.task_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|task| HttpResponse::Ok().json(APIResponse::new(task)))
        .map_err(handle_error)
}

#[derive(Debug)]
struct DeleteTaskUseCase {
    pub task_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteTaskUseCase {
    type Response = Task;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteTask";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.tasks.delete(&self.task_id).await {
            Ok(Some(task)) => Ok(task),
            Ok(None) => Err(UseCaseError::NotFound(self.task_id.clone())),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
