use super::check_rows;
use crate::compliance::reminder::{expiry_state, ReminderCandidate};
use chrono::NaiveDate;
use enterprise_planner_domain::{
    date::format_date, CheckOutcome, ComplianceArea, Contract, TaskCategory,
};
use enterprise_planner_infra::PlannerContext;

const ADMINISTRATION_ASSIGNEE: &str = "Verwaltung";

pub async fn check_contracts(ctx: &PlannerContext, today: NaiveDate) -> CheckOutcome {
    let rows = ctx.repos.contracts.find_all().await;
    check_rows(ctx, ComplianceArea::Contracts, rows, |contract| {
        contract_reminders(contract, today)
    })
    .await
}

pub fn contract_reminders(contract: &Contract, today: NaiveDate) -> Vec<ReminderCandidate> {
    let end_date = match contract.end_date {
        Some(end_date) => end_date,
        None => return Vec::new(),
    };
    let eval = match contract.deadline_rule().evaluate(end_date, today) {
        Some(eval) => eval,
        None => return Vec::new(),
    };

    let description = if eval.is_expired() {
        format!(
            "Vertrag \"{}\" mit {} ist seit {} Tagen abgelaufen!",
            contract.name,
            contract.partner,
            eval.days_overdue()
        )
    } else {
        let mut description = format!(
            "Vertrag \"{}\" mit {} läuft in {} Tagen ab ({}).",
            contract.name,
            contract.partner,
            eval.days_left,
            format_date(&end_date)
        );
        if let Some(period) = &contract.cancelation_period {
            description.push_str(&format!(" Kündigungsfrist: {}", period));
        }
        description
    };

    vec![ReminderCandidate::from_evaluation(
        format!("Vertrag {}: {}", contract.name, expiry_state(&eval)),
        description,
        TaskCategory::Contract,
        ADMINISTRATION_ASSIGNEE,
        &eval,
    )]
}
