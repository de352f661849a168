use super::{by_due_date, ITaskRepo};
use crate::repos::shared::inmemory_repo::*;
use chrono::NaiveDate;
use enterprise_planner_domain::{Task, ID};

pub struct InMemoryTaskRepo {
    tasks: std::sync::Mutex<Vec<Task>>,
}

impl InMemoryTaskRepo {
    pub fn new() -> Self {
        Self {
            tasks: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ITaskRepo for InMemoryTaskRepo {
    async fn insert(&self, task: &Task) -> anyhow::Result<()> {
        insert(task, &self.tasks);
        Ok(())
    }

    async fn save(&self, task: &Task) -> anyhow::Result<()> {
        save(task, &self.tasks);
        Ok(())
    }

    async fn find(&self, task_id: &ID) -> anyhow::Result<Option<Task>> {
        Ok(find(task_id, &self.tasks))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Task>> {
        let mut tasks = find_all(&self.tasks);
        tasks.sort_by(by_due_date);
        Ok(tasks)
    }

    async fn find_open_by_title(&self, title: &str) -> anyhow::Result<Option<Task>> {
        Ok(find_by(&self.tasks, |task| task.is_open() && task.title == title)
            .into_iter()
            .next())
    }

    async fn find_open_due_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> anyhow::Result<Vec<Task>> {
        let mut tasks = find_by(&self.tasks, |task| {
            task.is_open()
                && task
                    .due_date
                    .map(|due| due >= from && due <= to)
                    .unwrap_or(false)
        });
        tasks.sort_by(by_due_date);
        Ok(tasks)
    }

    async fn delete(&self, task_id: &ID) -> anyhow::Result<Option<Task>> {
        Ok(delete(task_id, &self.tasks))
    }
}
