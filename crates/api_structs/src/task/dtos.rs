use chrono::{DateTime, NaiveDate, Utc};
use enterprise_planner_domain::{
    RecurringInterval, Task, TaskCategory, TaskPriority, TaskStatus, ID,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TaskDTO {
    pub id: ID,
    pub title: String,
    pub description: String,
    pub category: TaskCategory,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub assignee: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub recurring: bool,
    pub recurring_interval: Option<RecurringInterval>,
    pub vehicle_id: Option<ID>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<NaiveDate>,
}

impl TaskDTO {
    pub fn new(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            category: task.category,
            priority: task.priority,
            status: task.status,
            assignee: task.assignee,
            due_date: task.due_date,
            recurring: task.recurring,
            recurring_interval: task.recurring_interval,
            vehicle_id: task.vehicle_id,
            created_by: task.created_by,
            created_at: task.created_at,
            completed_at: task.completed_at,
        }
    }
}
