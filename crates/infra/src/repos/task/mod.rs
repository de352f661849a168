mod inmemory;
mod sqlite;

use chrono::NaiveDate;
use enterprise_planner_domain::{Task, ID};
pub use inmemory::InMemoryTaskRepo;
pub use sqlite::SqliteTaskRepo;

#[async_trait::async_trait]
pub trait ITaskRepo: Send + Sync {
    async fn insert(&self, task: &Task) -> anyhow::Result<()>;
    async fn save(&self, task: &Task) -> anyhow::Result<()>;
    async fn find(&self, task_id: &ID) -> anyhow::Result<Option<Task>>;
    /// All tasks ordered by due date, tasks without due date last
    async fn find_all(&self) -> anyhow::Result<Vec<Task>>;
    /// Any task with exactly this title which is not completed
    async fn find_open_by_title(&self, title: &str) -> anyhow::Result<Option<Task>>;
    /// Open tasks due within `[from, to]` ordered by due date
    async fn find_open_due_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> anyhow::Result<Vec<Task>>;
    async fn delete(&self, task_id: &ID) -> anyhow::Result<Option<Task>>;
}

/// Orders by due date with missing due dates last
fn by_due_date(a: &Task, b: &Task) -> std::cmp::Ordering {
    match (a.due_date, b.due_date) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    }
}
