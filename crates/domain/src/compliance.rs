use crate::date::{add_days, days_between};
use crate::task::TaskPriority;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A deadline rule decides whether an obligation with a given deadline
/// needs a reminder today, how urgent it is and when the reminder is due.
///
/// An obligation is considered once it is at most `lookback_days` away.
/// It is `Critical` when it is at most `critical_within` days away (or
/// already past), `High` when at most `high_within` days away and `Medium`
/// otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineRule {
    pub lookback_days: i64,
    pub critical_within: i64,
    pub high_within: i64,
    /// Maximum number of days from today until the reminder itself is due
    pub escalation_lead: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineEvaluation {
    /// Days left until the deadline. Zero or negative means expired
    pub days_left: i64,
    pub priority: TaskPriority,
    pub due_date: NaiveDate,
}

impl DeadlineEvaluation {
    pub fn is_expired(&self) -> bool {
        self.days_left <= 0
    }

    /// Days since the deadline passed
    pub fn days_overdue(&self) -> i64 {
        self.days_left.abs()
    }
}

impl DeadlineRule {
    pub const fn new(
        lookback_days: i64,
        critical_within: i64,
        high_within: i64,
        escalation_lead: i64,
    ) -> Self {
        Self {
            lookback_days,
            critical_within,
            high_within,
            escalation_lead,
        }
    }

    /// Same rule with a per-row lookback window, e.g. `Contract::reminder_days`
    pub const fn with_lookback(self, lookback_days: i64) -> Self {
        Self {
            lookback_days,
            ..self
        }
    }

    pub fn evaluate(&self, deadline: NaiveDate, today: NaiveDate) -> Option<DeadlineEvaluation> {
        let days_left = days_between(today, deadline);
        if days_left > self.lookback_days {
            return None;
        }

        let priority = if days_left <= 0 || days_left <= self.critical_within {
            TaskPriority::Critical
        } else if days_left <= self.high_within {
            TaskPriority::High
        } else {
            TaskPriority::Medium
        };

        let due_date = if days_left <= 0 {
            today
        } else {
            std::cmp::min(deadline, add_days(today, self.escalation_lead))
        };

        Some(DeadlineEvaluation {
            days_left,
            priority,
            due_date,
        })
    }
}

pub const DRIVING_LICENSE_RULE: DeadlineRule = DeadlineRule::new(90, 30, 90, 7);
pub const FIRST_AID_RULE: DeadlineRule = DeadlineRule::new(60, 30, 60, 14);
pub const SAFETY_TRAINING_RULE: DeadlineRule = DeadlineRule::new(90, 30, 60, 14);
pub const FORKLIFT_LICENSE_RULE: DeadlineRule = DeadlineRule::new(90, 30, 60, 14);
/// TÜV, AU and UVV
pub const VEHICLE_INSPECTION_RULE: DeadlineRule = DeadlineRule::new(60, 7, 30, 14);
pub const TACHOGRAPH_READ_RULE: DeadlineRule = DeadlineRule::new(14, 0, 7, 7);
pub const TACHOGRAPH_CALIBRATION_RULE: DeadlineRule = DeadlineRule::new(30, 0, 14, 14);
pub const CERTIFICATE_RULE: DeadlineRule = DeadlineRule::new(30, 7, 30, 14);
pub const CONTRACT_RULE: DeadlineRule = DeadlineRule::new(90, 30, 60, 30);
pub const MAINTENANCE_RULE: DeadlineRule = DeadlineRule::new(30, 0, 7, 7);

/// Driver cards have to be read at least every 28 days
pub const DRIVER_CARD_READ_CYCLE_DAYS: i64 = 28;
/// Reminders for reading the driver card start this many days after the last read
pub const DRIVER_CARD_WARNING_DAYS: i64 = 23;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverCardEvaluation {
    pub days_since_read: i64,
    pub priority: TaskPriority,
}

impl DriverCardEvaluation {
    pub fn is_overdue(&self) -> bool {
        self.days_since_read >= DRIVER_CARD_READ_CYCLE_DAYS
    }

    pub fn days_overdue(&self) -> i64 {
        self.days_since_read - DRIVER_CARD_READ_CYCLE_DAYS
    }

    pub fn days_remaining(&self) -> i64 {
        DRIVER_CARD_READ_CYCLE_DAYS - self.days_since_read
    }
}

pub fn evaluate_driver_card(last_read: NaiveDate, today: NaiveDate) -> Option<DriverCardEvaluation> {
    let days_since_read = days_between(last_read, today);
    if days_since_read < DRIVER_CARD_WARNING_DAYS {
        return None;
    }
    let priority = if days_since_read >= DRIVER_CARD_READ_CYCLE_DAYS {
        TaskPriority::Critical
    } else {
        TaskPriority::High
    };
    Some(DriverCardEvaluation {
        days_since_read,
        priority,
    })
}

/// Overall status of an entity in a compliance report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceStatus {
    Ok,
    Warning,
    Critical,
    Error,
}

/// The entity categories a compliance sweep inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceArea {
    Employees,
    Vehicles,
    Certificates,
    Contracts,
    Maintenance,
}

impl ComplianceArea {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employees => "employees",
            Self::Vehicles => "vehicles",
            Self::Certificates => "certificates",
            Self::Contracts => "contracts",
            Self::Maintenance => "maintenance",
        }
    }
}

/// Result of checking one `ComplianceArea`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub area: ComplianceArea,
    pub tasks_created: usize,
    /// Set when the rows of the area could not be loaded
    pub error: Option<String>,
}

impl CheckOutcome {
    pub fn completed(area: ComplianceArea, tasks_created: usize) -> Self {
        Self {
            area,
            tasks_created,
            error: None,
        }
    }

    pub fn failed(area: ComplianceArea, error: String) -> Self {
        Self {
            area,
            tasks_created: 0,
            error: Some(error),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepReport {
    pub today: NaiveDate,
    pub tasks_created: usize,
    pub outcomes: Vec<CheckOutcome>,
}

impl SweepReport {
    pub fn new(today: NaiveDate, outcomes: Vec<CheckOutcome>) -> Self {
        Self {
            today,
            tasks_created: outcomes.iter().map(|o| o.tasks_created).sum(),
            outcomes,
        }
    }

    pub fn failed_areas(&self) -> Vec<ComplianceArea> {
        self.outcomes
            .iter()
            .filter(|o| o.error.is_some())
            .map(|o| o.area)
            .collect()
    }
}
