use super::check_rows;
use crate::compliance::reminder::ReminderCandidate;
use chrono::NaiveDate;
use enterprise_planner_domain::{
    compliance::MAINTENANCE_RULE, date::format_date, CheckOutcome, ComplianceArea,
    MaintenanceRecord, TaskCategory,
};
use enterprise_planner_infra::PlannerContext;

const MAINTENANCE_ASSIGNEE: &str = "Wartung";

pub async fn check_maintenance(ctx: &PlannerContext, today: NaiveDate) -> CheckOutcome {
    let rows = ctx.repos.maintenance.find_all().await;
    check_rows(ctx, ComplianceArea::Maintenance, rows, |record| {
        maintenance_reminders(record, today)
    })
    .await
}

pub fn maintenance_reminders(
    record: &MaintenanceRecord,
    today: NaiveDate,
) -> Vec<ReminderCandidate> {
    let next = match record.next_maintenance {
        Some(next) => next,
        None => return Vec::new(),
    };
    let eval = match MAINTENANCE_RULE.evaluate(next, today) {
        Some(eval) => eval,
        None => return Vec::new(),
    };

    let subject = match &record.maintenance_type {
        Some(maintenance_type) => format!("Wartung für \"{}\" ({})", record.object, maintenance_type),
        None => format!("Wartung für \"{}\"", record.object),
    };
    let (state, description) = if eval.is_expired() {
        (
            "überfällig",
            format!("{} ist seit {} Tagen überfällig!", subject, eval.days_overdue()),
        )
    } else {
        (
            "bald fällig",
            format!(
                "{} ist in {} Tagen fällig ({}).",
                subject,
                eval.days_left,
                format_date(&next)
            ),
        )
    };

    let mut candidate = ReminderCandidate::from_evaluation(
        format!("Wartung {}: {}", record.object, state),
        description,
        TaskCategory::Maintenance,
        MAINTENANCE_ASSIGNEE,
        &eval,
    );
    candidate.vehicle_id = record.vehicle_id.clone();
    vec![candidate]
}
