use crate::{
    error::PlannerError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use enterprise_planner_api_structs::get_upcoming_tasks::*;
use enterprise_planner_domain::{date::add_days, Task};
use enterprise_planner_infra::PlannerContext;

const DEFAULT_DAYS: i64 = 7;
const MAX_DAYS: i64 = 30;

fn handle_error(e: UseCaseError) -> PlannerError {
    match e {
        UseCaseError::InvalidDays(days) => PlannerError::BadClientData(format!(
            "The number of days has to be between 1 and {}, got: {}",
            MAX_DAYS, days
        )),
        UseCaseError::StorageError => PlannerError::InternalError,
    }
}

pub async fn get_upcoming_tasks_controller(
    query: web::Query<QueryParams>,
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    let usecase = GetUpcomingTasksUseCase {
        days: query.days.unwrap_or(DEFAULT_DAYS),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.days, res.tasks)))
        .map_err(handle_error)
}

/// Open tasks due between today and `days` days from now
#[derive(Debug)]
struct GetUpcomingTasksUseCase {
    pub days: i64,
}

#[derive(Debug)]
struct UseCaseResponse {
    pub days: i64,
    pub tasks: Vec<Task>,
}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    InvalidDays(i64),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetUpcomingTasksUseCase {
    type Response = UseCaseResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "GetUpcomingTasks";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        if self.days < 1 || self.days > MAX_DAYS {
            return Err(UseCaseError::InvalidDays(self.days));
        }

        let today = ctx.sys.today();
        let tasks = ctx
            .repos
            .tasks
            .find_open_due_between(today, add_days(today, self.days))
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(UseCaseResponse {
            days: self.days,
            tasks,
        })
    }
}
