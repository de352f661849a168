use crate::dtos::TaskDTO;
use chrono::NaiveDate;
use enterprise_planner_domain::{Task, TaskPriority, TaskStatus, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub task: TaskDTO,
}

impl TaskResponse {
    pub fn new(task: Task) -> Self {
        Self {
            task: TaskDTO::new(task),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TasksResponse {
    pub tasks: Vec<TaskDTO>,
}

impl TasksResponse {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks: tasks.into_iter().map(TaskDTO::new).collect(),
        }
    }
}

pub mod create_task {
    use super::*;
    use enterprise_planner_domain::{RecurringInterval, TaskCategory};

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub title: String,
        pub category: TaskCategory,
        #[serde(default)]
        pub description: Option<String>,
        #[serde(default)]
        pub priority: Option<TaskPriority>,
        #[serde(default)]
        pub assignee: Option<String>,
        #[serde(default)]
        pub due_date: Option<NaiveDate>,
        #[serde(default)]
        pub recurring: Option<bool>,
        #[serde(default)]
        pub recurring_interval: Option<RecurringInterval>,
        #[serde(default)]
        pub vehicle_id: Option<ID>,
        #[serde(default)]
        pub created_by: Option<String>,
    }

    pub type APIResponse = TaskResponse;
}

pub mod get_task {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub task_id: ID,
    }

    pub type APIResponse = TaskResponse;
}

pub mod get_tasks {
    use super::*;

    pub type APIResponse = TasksResponse;
}

pub mod update_task {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub task_id: ID,
    }

    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub status: Option<TaskStatus>,
        #[serde(default)]
        pub title: Option<String>,
        #[serde(default)]
        pub description: Option<String>,
        #[serde(default)]
        pub priority: Option<TaskPriority>,
        #[serde(default)]
        pub assignee: Option<String>,
        #[serde(default)]
        pub due_date: Option<NaiveDate>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub task: TaskDTO,
        /// The next occurrence when a recurring maintenance task was completed
        pub follow_up_task: Option<TaskDTO>,
    }

    impl APIResponse {
        pub fn new(task: Task, follow_up_task: Option<Task>) -> Self {
            Self {
                task: TaskDTO::new(task),
                follow_up_task: follow_up_task.map(TaskDTO::new),
            }
        }
    }
}

pub mod delete_task {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub task_id: ID,
    }

    pub type APIResponse = TaskResponse;
}

pub mod get_upcoming_tasks {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub days: Option<i64>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub days: i64,
        pub tasks: Vec<TaskDTO>,
    }

    impl APIResponse {
        pub fn new(days: i64, tasks: Vec<Task>) -> Self {
            Self {
                days,
                tasks: tasks.into_iter().map(TaskDTO::new).collect(),
            }
        }
    }
}
