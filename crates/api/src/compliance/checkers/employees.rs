use super::check_rows;
use crate::compliance::reminder::{expiry_state, ReminderCandidate};
use chrono::NaiveDate;
use enterprise_planner_domain::{
    compliance::{evaluate_driver_card, DRIVING_LICENSE_RULE},
    date::format_date,
    CheckOutcome, ComplianceArea, Employee, EmployeeCertificate, TaskCategory, TaskPriority,
};
use enterprise_planner_infra::PlannerContext;
use tracing::warn;

pub async fn check_employees(ctx: &PlannerContext, today: NaiveDate) -> CheckOutcome {
    let rows = ctx.repos.employees.find_all().await;
    check_rows(ctx, ComplianceArea::Employees, rows, |employee| {
        employee_reminders(employee, today)
    })
    .await
}

/// Driving licenses, the driver card and the personal certificates of one employee
pub fn employee_reminders(employee: &Employee, today: NaiveDate) -> Vec<ReminderCandidate> {
    let mut reminders = Vec::new();
    let name = &employee.name;

    match employee.driving_licenses() {
        Ok(licenses) => {
            for license in licenses {
                let expiry = match license.expiry {
                    Some(expiry) => expiry,
                    None => continue,
                };
                let eval = match DRIVING_LICENSE_RULE.evaluate(expiry, today) {
                    Some(eval) => eval,
                    None => continue,
                };
                let description = if eval.is_expired() {
                    format!(
                        "Führerschein Klasse {} ist seit {} Tagen abgelaufen. Sofortige Erneuerung erforderlich!",
                        license.class,
                        eval.days_overdue()
                    )
                } else {
                    format!(
                        "Führerschein Klasse {} läuft in {} Tagen ab ({}). Rechtzeitig erneuern!",
                        license.class,
                        eval.days_left,
                        format_date(&expiry)
                    )
                };
                reminders.push(ReminderCandidate::from_evaluation(
                    format!("{}: Führerschein {} {}", name, license.class, expiry_state(&eval)),
                    description,
                    TaskCategory::Certificate,
                    name,
                    &eval,
                ));
            }
        }
        Err(e) => warn!(
            "Skipping the driving license check of employee {}: {}",
            employee.id, e
        ),
    }

    if let Some(candidate) = driver_card_reminder(employee, today) {
        reminders.push(candidate);
    }

    for certificate in EmployeeCertificate::ALL {
        let expiry = match employee.certificate_expiry(certificate) {
            Some(expiry) => expiry,
            None => continue,
        };
        let eval = match certificate.rule().evaluate(expiry, today) {
            Some(eval) => eval,
            None => continue,
        };
        let description = if eval.is_expired() {
            format!(
                "{} ist seit {} Tagen abgelaufen. Sofortige Erneuerung erforderlich!",
                certificate.label(),
                eval.days_overdue()
            )
        } else {
            format!(
                "{} läuft in {} Tagen ab ({}). Rechtzeitig erneuern!",
                certificate.label(),
                eval.days_left,
                format_date(&expiry)
            )
        };
        reminders.push(ReminderCandidate::from_evaluation(
            format!("{}: {} {}", name, certificate.label(), expiry_state(&eval)),
            description,
            TaskCategory::Certificate,
            name,
            &eval,
        ));
    }

    reminders
}

fn driver_card_reminder(employee: &Employee, today: NaiveDate) -> Option<ReminderCandidate> {
    let name = &employee.name;
    let (title, description, priority) = match employee.driver_card_read {
        Some(last_read) => {
            let eval = evaluate_driver_card(last_read, today)?;
            let last_read = format_date(&last_read);
            if eval.is_overdue() {
                (
                    format!("{}: Fahrerkarte überfällig auslesen", name),
                    format!(
                        "Fahrerkarte ist {} Tage überfällig! Letzte Auslesung: {}. Sofort auslesen!",
                        eval.days_overdue(),
                        last_read
                    ),
                    eval.priority,
                )
            } else {
                (
                    format!("{}: Fahrerkarte bald auslesen", name),
                    format!(
                        "Fahrerkarte muss in {} Tagen ausgelesen werden. Letzte Auslesung: {}",
                        eval.days_remaining(),
                        last_read
                    ),
                    eval.priority,
                )
            }
        }
        None if employee.is_driver() => (
            format!("{}: Fahrerkarte erstmals auslesen", name),
            "Noch keine Fahrerkarten-Auslesung dokumentiert. Erste Auslesung erforderlich."
                .to_string(),
            TaskPriority::High,
        ),
        None => return None,
    };

    Some(ReminderCandidate {
        title,
        description,
        category: TaskCategory::Certificate,
        priority,
        due_date: today,
        assignee: name.clone(),
        vehicle_id: None,
    })
}
