use super::ITaskRepo;
use crate::repos::shared::sqlite_repo::{date_column, date_value, id_column, optional_id_column};
use chrono::{DateTime, NaiveDate, Utc};
use enterprise_planner_domain::{date::format_date, Task, TaskStatus, ID};
use sqlx::{FromRow, SqlitePool};
use tracing::warn;

pub struct SqliteTaskRepo {
    pool: SqlitePool,
}

impl SqliteTaskRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TaskRaw {
    task_uid: String,
    title: String,
    description: String,
    category: String,
    priority: String,
    status: String,
    assignee: Option<String>,
    due_date: Option<String>,
    recurring: bool,
    recurring_interval: Option<String>,
    vehicle_uid: Option<String>,
    created_by: String,
    created_at: DateTime<Utc>,
    completed_at: Option<String>,
}

impl TryFrom<TaskRaw> for Task {
    type Error = anyhow::Error;

    fn try_from(raw: TaskRaw) -> anyhow::Result<Self> {
        let recurring_interval = match raw.recurring_interval.as_deref() {
            None | Some("") => None,
            Some(interval) => match interval.parse() {
                Ok(interval) => Some(interval),
                Err(e) => {
                    warn!("Ignoring recurring interval of task {}: {}", raw.task_uid, e);
                    None
                }
            },
        };
        Ok(Task {
            id: id_column("tasks", &raw.task_uid)?,
            title: raw.title,
            description: raw.description,
            category: raw.category.parse()?,
            priority: raw.priority.parse()?,
            status: raw.status.parse()?,
            assignee: raw.assignee,
            due_date: date_column("tasks", "due_date", raw.due_date),
            recurring: raw.recurring,
            recurring_interval,
            vehicle_id: optional_id_column("tasks", raw.vehicle_uid),
            created_by: raw.created_by,
            created_at: raw.created_at,
            completed_at: date_column("tasks", "completed_at", raw.completed_at),
        })
    }
}

fn into_tasks(rows: Vec<TaskRaw>) -> anyhow::Result<Vec<Task>> {
    rows.into_iter().map(Task::try_from).collect()
}

const ORDER_BY_DUE_DATE: &str = "ORDER BY due_date IS NULL, due_date ASC, created_at ASC";

#[async_trait::async_trait]
impl ITaskRepo for SqliteTaskRepo {
    async fn insert(&self, task: &Task) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO tasks(task_uid, title, description, category, priority, status,
                assignee, due_date, recurring, recurring_interval, vehicle_uid, created_by,
                created_at, completed_at)
            VALUES(?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(task.id.as_string())
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.category.as_str())
        .bind(task.priority.as_str())
        .bind(task.status.as_str())
        .bind(&task.assignee)
        .bind(date_value(&task.due_date))
        .bind(task.recurring)
        .bind(task.recurring_interval.map(|i| i.as_str()))
        .bind(task.vehicle_id.as_ref().map(|id| id.as_string()))
        .bind(&task.created_by)
        .bind(task.created_at)
        .bind(date_value(&task.completed_at))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save(&self, task: &Task) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE tasks
            SET title = ?,
            description = ?,
            category = ?,
            priority = ?,
            status = ?,
            assignee = ?,
            due_date = ?,
            recurring = ?,
            recurring_interval = ?,
            vehicle_uid = ?,
            completed_at = ?
            WHERE task_uid = ?
            "#,
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.category.as_str())
        .bind(task.priority.as_str())
        .bind(task.status.as_str())
        .bind(&task.assignee)
        .bind(date_value(&task.due_date))
        .bind(task.recurring)
        .bind(task.recurring_interval.map(|i| i.as_str()))
        .bind(task.vehicle_id.as_ref().map(|id| id.as_string()))
        .bind(date_value(&task.completed_at))
        .bind(task.id.as_string())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, task_id: &ID) -> anyhow::Result<Option<Task>> {
        let task: Option<TaskRaw> = sqlx::query_as("SELECT * FROM tasks WHERE task_uid = ?")
            .bind(task_id.as_string())
            .fetch_optional(&self.pool)
            .await?;
        task.map(Task::try_from).transpose()
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Task>> {
        let tasks: Vec<TaskRaw> = sqlx::query_as(&format!("SELECT * FROM tasks {}", ORDER_BY_DUE_DATE))
            .fetch_all(&self.pool)
            .await?;
        into_tasks(tasks)
    }

    async fn find_open_by_title(&self, title: &str) -> anyhow::Result<Option<Task>> {
        let task: Option<TaskRaw> =
            sqlx::query_as("SELECT * FROM tasks WHERE title = ? AND status != ? LIMIT 1")
                .bind(title)
                .bind(TaskStatus::Completed.as_str())
                .fetch_optional(&self.pool)
                .await?;
        task.map(Task::try_from).transpose()
    }

    async fn find_open_due_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> anyhow::Result<Vec<Task>> {
        let tasks: Vec<TaskRaw> = sqlx::query_as(&format!(
            "SELECT * FROM tasks WHERE status != ? AND date(due_date) BETWEEN date(?) AND date(?) {}",
            ORDER_BY_DUE_DATE
        ))
        .bind(TaskStatus::Completed.as_str())
        .bind(format_date(&from))
        .bind(format_date(&to))
        .fetch_all(&self.pool)
        .await?;
        into_tasks(tasks)
    }

    async fn delete(&self, task_id: &ID) -> anyhow::Result<Option<Task>> {
        let task: Option<TaskRaw> = sqlx::query_as("DELETE FROM tasks WHERE task_uid = ? RETURNING *")
            .bind(task_id.as_string())
            .fetch_optional(&self.pool)
            .await?;
        task.map(Task::try_from).transpose()
    }
}
