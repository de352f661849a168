use crate::{APIResponse, BaseClient, ID};
use enterprise_planner_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct TaskClient {
    base: Arc<BaseClient>,
}

pub type CreateTaskInput = create_task::RequestBody;

pub struct UpdateTaskInput {
    pub task_id: ID,
    pub update: update_task::RequestBody,
}

impl TaskClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateTaskInput) -> APIResponse<create_task::APIResponse> {
        self.base
            .post(input, "tasks".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get(&self, task_id: &ID) -> APIResponse<get_task::APIResponse> {
        self.base
            .get(format!("tasks/{}", task_id), StatusCode::OK)
            .await
    }

    pub async fn get_all(&self) -> APIResponse<get_tasks::APIResponse> {
        self.base.get("tasks".into(), StatusCode::OK).await
    }

    /// Open tasks due within the next `days` days, 7 when not given
    pub async fn get_upcoming(
        &self,
        days: Option<i64>,
    ) -> APIResponse<get_upcoming_tasks::APIResponse> {
        let path = match days {
            Some(days) => format!("upcoming-tasks?days={}", days),
            None => "upcoming-tasks".to_string(),
        };
        self.base.get(path, StatusCode::OK).await
    }

    pub async fn update(&self, input: UpdateTaskInput) -> APIResponse<update_task::APIResponse> {
        self.base
            .put(
                input.update,
                format!("tasks/{}", input.task_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, task_id: &ID) -> APIResponse<delete_task::APIResponse> {
        self.base
            .delete(format!("tasks/{}", task_id), StatusCode::OK)
            .await
    }
}
