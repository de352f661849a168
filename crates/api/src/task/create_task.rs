use crate::{
    error::PlannerError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use enterprise_planner_api_structs::create_task::*;
use enterprise_planner_domain::{RecurringInterval, Task, TaskCategory, TaskPriority, ID};
use enterprise_planner_infra::PlannerContext;

const DEFAULT_CREATOR: &str = "Benutzer";

fn handle_error(e: UseCaseError) -> PlannerError {
    match e {
        UseCaseError::EmptyTitle => {
            PlannerError::BadClientData("A task needs a non-empty title".into())
        }
        UseCaseError::StorageError => PlannerError::InternalError,
    }
}

pub async fn create_task_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    let body = body.0;
    let usecase = CreateTaskUseCase {
        title: body.title,
        description: body.description.unwrap_or_default(),
        category: body.category,
        priority: body.priority.unwrap_or_default(),
        assignee: body.assignee,
        due_date: body.due_date,
        recurring: body.recurring.unwrap_or(false),
        recurring_interval: body.recurring_interval,
        vehicle_id: body.vehicle_id,
        created_by: body.created_by.unwrap_or_else(|| DEFAULT_CREATOR.into()),
    };

    execute(usecase, &ctx)
        .await
        .map(|task| HttpResponse::Created().json(APIResponse::new(task)))
        .map_err(handle_error)
}

#[derive(Debug)]
struct CreateTaskUseCase {
    pub title: String,
    pub description: String,
    pub category: TaskCategory,
    pub priority: TaskPriority,
    pub assignee: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub recurring: bool,
    pub recurring_interval: Option<RecurringInterval>,
    pub vehicle_id: Option<ID>,
    pub created_by: String,
}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    EmptyTitle,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateTaskUseCase {
    type Response = Task;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateTask";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(UseCaseError::EmptyTitle);
        }

        let mut task = Task::new(
            title.to_string(),
            self.category,
            self.created_by.clone(),
            ctx.sys.now(),
        );
        task.description = self.description.clone();
        task.priority = self.priority;
        task.assignee = self.assignee.clone();
        task.due_date = self.due_date;
        task.recurring = self.recurring;
        task.recurring_interval = self.recurring_interval;
        task.vehicle_id = self.vehicle_id.clone();

        ctx.repos
            .tasks
            .insert(&task)
            .await
            .map(|_| task)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enterprise_planner_domain::TaskStatus;

    fn usecase(title: &str) -> CreateTaskUseCase {
        CreateTaskUseCase {
            title: title.into(),
            description: String::new(),
            category: TaskCategory::Maintenance,
            priority: TaskPriority::High,
            assignee: Some("Werkstatt".into()),
            due_date: NaiveDate::from_ymd_opt(2024, 4, 1),
            recurring: true,
            recurring_interval: Some(RecurringInterval::Monthly),
            vehicle_id: None,
            created_by: DEFAULT_CREATOR.into(),
        }
    }

    #[actix_web::test]
    async fn creates_open_task() {
        let ctx = PlannerContext::create_inmemory();
        let task = execute(usecase("Ölwechsel"), &ctx).await.unwrap();
        assert_eq!(task.status, TaskStatus::Open);
        assert!(task.recurring);

        let stored = ctx.repos.tasks.find(&task.id).await.unwrap().unwrap();
        assert_eq!(stored.title, "Ölwechsel");
        assert_eq!(stored.recurring_interval, Some(RecurringInterval::Monthly));
    }

    #[actix_web::test]
    async fn rejects_blank_title() {
        let ctx = PlannerContext::create_inmemory();
        let res = execute(usecase("   "), &ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::EmptyTitle);
        assert!(ctx.repos.tasks.find_all().await.unwrap().is_empty());
    }
}
