use crate::{
    error::PlannerError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use enterprise_planner_api_structs::update_task::*;
use enterprise_planner_domain::{Task, TaskPriority, TaskStatus, ID};
use enterprise_planner_infra::PlannerContext;
use tracing::info;

fn handle_error(e: UseCaseError) -> PlannerError {
    match e {
        UseCaseError::NotFound(task_id) => {
            PlannerError::NotFound(format!("The task with id: {}, was not found.", task_id))
        }
        UseCaseError::EmptyTitle => {
            PlannerError::BadClientData("A task needs a non-empty title".into())
        }
        UseCaseError::StorageError => PlannerError::InternalError,
    }
}

pub async fn update_task_controller(
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    let body = body.0;
    let usecase = UpdateTaskUseCase {
        task_id: path.task_id.clone(),
        status: body.status,
        title: body.title,
        description: body.description,
        priority: body.priority,
        assignee: body.assignee,
        due_date: body.due_date,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.task, res.follow_up_task)))
        .map_err(handle_error)
}

/// Updates the given fields of a task. Completing a recurring maintenance
/// task schedules its next occurrence.
#[derive(Debug)]
struct UpdateTaskUseCase {
    pub task_id: ID,
    pub status: Option<TaskStatus>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<TaskPriority>,
    pub assignee: Option<String>,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug)]
struct UseCaseResponse {
    pub task: Task,
    pub follow_up_task: Option<Task>,
}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    NotFound(ID),
    EmptyTitle,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateTaskUseCase {
    type Response = UseCaseResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateTask";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        let mut task = match ctx.repos.tasks.find(&self.task_id).await {
            Ok(Some(task)) => task,
            Ok(None) => return Err(UseCaseError::NotFound(self.task_id.clone())),
            Err(_) => return Err(UseCaseError::StorageError),
        };

        if let Some(title) = &self.title {
            let title = title.trim();
            if title.is_empty() {
                return Err(UseCaseError::EmptyTitle);
            }
            task.title = title.to_string();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(assignee) = &self.assignee {
            task.assignee = Some(assignee.clone());
        }
        if let Some(due_date) = self.due_date {
            task.due_date = Some(due_date);
        }

        let today = ctx.sys.today();
        let mut follow_up_task = None;
        if let Some(status) = self.status {
            let completes = task.is_open() && status == TaskStatus::Completed;
            task.set_status(status, today);
            if completes {
                follow_up_task = task.next_recurrence(today, ctx.sys.now());
            }
        }

        ctx.repos
            .tasks
            .save(&task)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        if let Some(next) = &follow_up_task {
            ctx.repos
                .tasks
                .insert(next)
                .await
                .map_err(|_| UseCaseError::StorageError)?;
            info!("Scheduled the next maintenance task: {}", next.title);
        }

        Ok(UseCaseResponse {
            task,
            follow_up_task,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use enterprise_planner_domain::{RecurringInterval, TaskCategory, RECURRING_TASK_CREATOR};
    use enterprise_planner_infra::StaticTimeSys;
    use std::sync::Arc;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
    }

    fn setup() -> PlannerContext {
        let mut ctx = PlannerContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys::at_date(today()));
        ctx
    }

    fn status_update(task_id: &ID, status: TaskStatus) -> UpdateTaskUseCase {
        UpdateTaskUseCase {
            task_id: task_id.clone(),
            status: Some(status),
            title: None,
            description: None,
            priority: None,
            assignee: None,
            due_date: None,
        }
    }

    #[actix_web::test]
    async fn completing_recurring_maintenance_schedules_next_task() {
        let ctx = setup();
        let mut task = Task::new(
            "Wartung: Hebebühne".into(),
            TaskCategory::Maintenance,
            "Werkstatt".into(),
            Utc::now(),
        );
        task.description = "Hebebühne 2\nPrüfbuch beachten".into();
        task.recurring = true;
        task.recurring_interval = Some(RecurringInterval::Monthly);
        ctx.repos.tasks.insert(&task).await.unwrap();

        let res = execute(status_update(&task.id, TaskStatus::Completed), &ctx)
            .await
            .unwrap();
        assert_eq!(res.task.status, TaskStatus::Completed);
        assert_eq!(res.task.completed_at, Some(today()));

        let next = res.follow_up_task.unwrap();
        assert_eq!(next.title, "Wartung: Hebebühne");
        assert_eq!(next.description, "Nächste planmäßige Wartung für: Hebebühne 2");
        assert_eq!(next.due_date, NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(next.created_by, RECURRING_TASK_CREATOR);
        assert_eq!(next.status, TaskStatus::Open);
        assert_eq!(ctx.repos.tasks.find_all().await.unwrap().len(), 2);

        // Completing it again does not schedule another occurrence
        let res = execute(status_update(&task.id, TaskStatus::Completed), &ctx)
            .await
            .unwrap();
        assert!(res.follow_up_task.is_none());
        assert_eq!(ctx.repos.tasks.find_all().await.unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn reopening_clears_completion_date() {
        let ctx = setup();
        let task = Task::new("TÜV HH-AB 1: abgelaufen".into(), TaskCategory::Vehicle, "x".into(), Utc::now());
        ctx.repos.tasks.insert(&task).await.unwrap();

        execute(status_update(&task.id, TaskStatus::Completed), &ctx)
            .await
            .unwrap();
        let res = execute(status_update(&task.id, TaskStatus::Open), &ctx)
            .await
            .unwrap();
        assert_eq!(res.task.completed_at, None);
        assert!(res.follow_up_task.is_none());
    }

    #[actix_web::test]
    async fn unknown_task_is_not_found() {
        let ctx = setup();
        let id = ID::default();
        let res = execute(status_update(&id, TaskStatus::Completed), &ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::NotFound(id));
    }
}
