use crate::date::{add_days, add_months};
use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// `createdBy` marker of `Task`s materialized by the compliance sweep
pub const COMPLIANCE_TASK_CREATOR: &str = "System (Compliance)";
/// `createdBy` marker of follow-up `Task`s for recurring maintenance
pub const RECURRING_TASK_CREATOR: &str = "System (Auto)";

const MAINTENANCE_TITLE_PREFIX: &str = "Wartung: ";

#[derive(Error, Debug)]
#[error("Unknown {kind}: `{value}`")]
pub struct InvalidVariantError {
    kind: &'static str,
    value: String,
}

impl InvalidVariantError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

macro_rules! string_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = InvalidVariantError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(InvalidVariantError::new($kind, s)),
                }
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Certificate,
    Vehicle,
    Contract,
    Maintenance,
}

string_enum!(TaskCategory, "task category", {
    Certificate => "certificate",
    Vehicle => "vehicle",
    Contract => "contract",
    Maintenance => "maintenance",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Medium,
    High,
    Critical,
}

string_enum!(TaskPriority, "task priority", {
    Medium => "medium",
    High => "high",
    Critical => "critical",
});

impl Default for TaskPriority {
    fn default() -> Self {
        Self::Medium
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Open,
    Completed,
}

string_enum!(TaskStatus, "task status", {
    Open => "open",
    Completed => "completed",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringInterval {
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

string_enum!(RecurringInterval, "recurring interval", {
    Weekly => "weekly",
    Monthly => "monthly",
    Quarterly => "quarterly",
    Yearly => "yearly",
});

impl RecurringInterval {
    /// The next occurrence counted from `date`
    pub fn next_after(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Weekly => Some(add_days(date, 7)),
            Self::Monthly => add_months(date, 1),
            Self::Quarterly => add_months(date, 3),
            Self::Yearly => add_months(date, 12),
        }
    }
}

/// A `Task` is something someone in the company should act on before
/// its `due_date`. Tasks are either created manually or by the compliance
/// sweep, in which case they are reminders for an upcoming deadline.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: ID,
    /// Also the deduplication key of compliance reminders
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

impl Entity for Task {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Task {
    pub fn new(
        title: String,
        category: TaskCategory,
        created_by: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Default::default(),
            title,
            description: String::new(),
            category,
            priority: Default::default(),
            status: TaskStatus::Open,
            assignee: None,
            due_date: None,
            recurring: false,
            recurring_interval: None,
            vehicle_id: None,
            created_by,
            created_at,
            completed_at: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status != TaskStatus::Completed
    }

    /// Changes the status. The completion date is set the first time the
    /// task is completed and cleared when it is reopened.
    pub fn set_status(&mut self, status: TaskStatus, today: NaiveDate) {
        match status {
            TaskStatus::Completed => {
                if self.completed_at.is_none() {
                    self.completed_at = Some(today);
                }
            }
            TaskStatus::Open => self.completed_at = None,
        }
        self.status = status;
    }

    /// The next occurrence of a recurring maintenance `Task`, scheduled
    /// from `today` using its `recurring_interval`.
    pub fn next_recurrence(&self, today: NaiveDate, now: DateTime<Utc>) -> Option<Task> {
        if self.category != TaskCategory::Maintenance || !self.recurring {
            return None;
        }
        let interval = self.recurring_interval?;
        let due_date = interval.next_after(today)?;

        let title = self
            .title
            .strip_prefix(MAINTENANCE_TITLE_PREFIX)
            .unwrap_or(&self.title);
        let first_line = self.description.lines().next().unwrap_or_default();

        let mut task = Task::new(
            format!("{}{}", MAINTENANCE_TITLE_PREFIX, title),
            TaskCategory::Maintenance,
            RECURRING_TASK_CREATOR.into(),
            now,
        );
        task.description = format!("Nächste planmäßige Wartung für: {}", first_line);
        task.priority = self.priority;
        task.assignee = self.assignee.clone();
        task.due_date = Some(due_date);
        task.recurring = true;
        task.recurring_interval = Some(interval);
        task.vehicle_id = self.vehicle_id.clone();
        Some(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn maintenance_task(interval: Option<RecurringInterval>) -> Task {
        let mut task = Task::new(
            "Wartung: Hebebühne".into(),
            TaskCategory::Maintenance,
            "Max".into(),
            Utc::now(),
        );
        task.description = "Hydraulik prüfen\nÖl nachfüllen".into();
        task.recurring = true;
        task.recurring_interval = interval;
        task
    }

    #[test]
    fn enums_roundtrip_their_wire_names() {
        assert_eq!("critical".parse::<TaskPriority>().unwrap(), TaskPriority::Critical);
        assert_eq!(TaskCategory::Maintenance.as_str(), "maintenance");
        assert_eq!(TaskStatus::Open.to_string(), "open");
        assert!("urgent".parse::<TaskPriority>().is_err());
        assert!(TaskPriority::Critical > TaskPriority::High);
    }

    #[test]
    fn completing_sets_completion_date_once() {
        let mut task = maintenance_task(None);
        task.set_status(TaskStatus::Completed, date(2024, 1, 1));
        task.set_status(TaskStatus::Completed, date(2024, 1, 5));
        assert_eq!(task.completed_at, Some(date(2024, 1, 1)));
        assert!(!task.is_open());

        task.set_status(TaskStatus::Open, date(2024, 1, 6));
        assert_eq!(task.completed_at, None);
        assert!(task.is_open());
    }

    #[test]
    fn schedules_next_recurrence_of_maintenance() {
        let today = date(2024, 1, 31);
        let task = maintenance_task(Some(RecurringInterval::Monthly));
        let next = task.next_recurrence(today, Utc::now()).expect("A follow up task");
        assert_eq!(next.title, "Wartung: Hebebühne");
        assert_eq!(next.description, "Nächste planmäßige Wartung für: Hydraulik prüfen");
        assert_eq!(next.due_date, Some(date(2024, 2, 29)));
        assert_eq!(next.created_by, RECURRING_TASK_CREATOR);
        assert_eq!(next.status, TaskStatus::Open);
        assert_ne!(next.id, task.id);

        let weekly = maintenance_task(Some(RecurringInterval::Weekly));
        assert_eq!(
            weekly.next_recurrence(today, Utc::now()).unwrap().due_date,
            Some(date(2024, 2, 7))
        );
    }

    #[test]
    fn no_recurrence_without_interval_or_for_other_categories() {
        let today = date(2024, 1, 31);
        assert!(maintenance_task(None).next_recurrence(today, Utc::now()).is_none());

        let mut task = maintenance_task(Some(RecurringInterval::Yearly));
        task.category = TaskCategory::Vehicle;
        assert!(task.next_recurrence(today, Utc::now()).is_none());
    }
}
