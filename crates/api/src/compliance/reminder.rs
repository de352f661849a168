use chrono::{DateTime, NaiveDate, Utc};
use enterprise_planner_domain::{
    DeadlineEvaluation, Task, TaskCategory, TaskPriority, COMPLIANCE_TASK_CREATOR, ID,
};
use enterprise_planner_infra::PlannerContext;
use tracing::{error, info};

/// A reminder the compliance sweep wants to exist as an open `Task`
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderCandidate {
    /// Identifies the obligation. At most one open task per title exists.
    pub title: String,
    pub description: String,
    pub category: TaskCategory,
    pub priority: TaskPriority,
    pub due_date: NaiveDate,
    pub assignee: String,
    pub vehicle_id: Option<ID>,
}

impl ReminderCandidate {
    pub fn from_evaluation(
        title: String,
        description: String,
        category: TaskCategory,
        assignee: &str,
        eval: &DeadlineEvaluation,
    ) -> Self {
        Self {
            title,
            description,
            category,
            priority: eval.priority,
            due_date: eval.due_date,
            assignee: assignee.to_string(),
            vehicle_id: None,
        }
    }

    fn into_task(self, now: DateTime<Utc>) -> Task {
        let mut task = Task::new(
            self.title,
            self.category,
            COMPLIANCE_TASK_CREATOR.into(),
            now,
        );
        task.description = self.description;
        task.priority = self.priority;
        task.assignee = Some(self.assignee);
        task.due_date = Some(self.due_date);
        task.vehicle_id = self.vehicle_id;
        task
    }
}

/// "abgelaufen" once the deadline has passed, "läuft bald ab" before
pub fn expiry_state(eval: &DeadlineEvaluation) -> &'static str {
    if eval.is_expired() {
        "abgelaufen"
    } else {
        "läuft bald ab"
    }
}

/// Inserts the reminder unless an open task with the same title exists.
/// Returns whether a task was created. Storage failures are logged and
/// reported as not created.
///
/// The lookup and the insert are not atomic, so two overlapping sweeps
/// may both insert the same reminder.
pub async fn create_reminder_task(ctx: &PlannerContext, candidate: ReminderCandidate) -> bool {
    match ctx.repos.tasks.find_open_by_title(&candidate.title).await {
        Ok(Some(_)) => return false,
        Ok(None) => (),
        Err(e) => {
            error!(
                "Unable to look up existing reminder `{}`: {:?}",
                candidate.title, e
            );
            return false;
        }
    }

    let task = candidate.into_task(ctx.sys.now());
    match ctx.repos.tasks.insert(&task).await {
        Ok(()) => {
            info!("Compliance reminder created: {}", task.title);
            true
        }
        Err(e) => {
            error!("Unable to create reminder `{}`: {:?}", task.title, e);
            false
        }
    }
}

pub async fn create_reminder_tasks(
    ctx: &PlannerContext,
    candidates: Vec<ReminderCandidate>,
) -> usize {
    let mut created = 0;
    for candidate in candidates {
        if create_reminder_task(ctx, candidate).await {
            created += 1;
        }
    }
    created
}
