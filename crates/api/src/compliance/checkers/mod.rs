mod certificates;
mod contracts;
mod employees;
mod maintenance;
mod vehicles;

pub use certificates::{certificate_reminders, check_certificates};
pub use contracts::{check_contracts, contract_reminders};
pub use employees::{check_employees, employee_reminders};
pub use maintenance::{check_maintenance, maintenance_reminders};
pub use vehicles::{check_vehicles, vehicle_reminders};

use super::reminder::{create_reminder_tasks, ReminderCandidate};
use enterprise_planner_domain::{CheckOutcome, ComplianceArea};
use enterprise_planner_infra::PlannerContext;
use tracing::error;

/// Turns every loaded row into its reminder candidates and inserts them.
/// A failed load makes the whole area report zero created tasks.
async fn check_rows<T, F>(
    ctx: &PlannerContext,
    area: ComplianceArea,
    rows: anyhow::Result<Vec<T>>,
    reminders: F,
) -> CheckOutcome
where
    F: Fn(&T) -> Vec<ReminderCandidate>,
{
    let rows = match rows {
        Ok(rows) => rows,
        Err(e) => {
            error!("Unable to load {} for the compliance check: {:?}", area.as_str(), e);
            return CheckOutcome::failed(area, e.to_string());
        }
    };

    let mut tasks_created = 0;
    for row in &rows {
        tasks_created += create_reminder_tasks(ctx, reminders(row)).await;
    }
    CheckOutcome::completed(area, tasks_created)
}
