use super::check_rows;
use crate::compliance::reminder::{expiry_state, ReminderCandidate};
use chrono::NaiveDate;
use enterprise_planner_domain::{
    compliance::{TACHOGRAPH_CALIBRATION_RULE, TACHOGRAPH_READ_RULE, VEHICLE_INSPECTION_RULE},
    date::format_date,
    CheckOutcome, ComplianceArea, DeadlineEvaluation, InspectionKind, TaskCategory, Vehicle,
};
use enterprise_planner_infra::PlannerContext;

const FLEET_ASSIGNEE: &str = "Fahrzeugverwaltung";

pub async fn check_vehicles(ctx: &PlannerContext, today: NaiveDate) -> CheckOutcome {
    let rows = ctx.repos.vehicles.find_all().await;
    check_rows(ctx, ComplianceArea::Vehicles, rows, |vehicle| {
        vehicle_reminders(vehicle, today)
    })
    .await
}

/// Inspections of every vehicle plus the tachograph deadlines of trucks
pub fn vehicle_reminders(vehicle: &Vehicle, today: NaiveDate) -> Vec<ReminderCandidate> {
    let mut reminders = Vec::new();
    let plate = &vehicle.plate;

    for kind in InspectionKind::ALL {
        let date = match vehicle.inspection_date(kind) {
            Some(date) => date,
            None => continue,
        };
        if let Some(eval) = VEHICLE_INSPECTION_RULE.evaluate(date, today) {
            let description = if eval.is_expired() {
                format!(
                    "{} für {} ({}) ist seit {} Tagen abgelaufen!",
                    kind.label(),
                    plate,
                    vehicle.vehicle_type,
                    eval.days_overdue()
                )
            } else {
                format!(
                    "{} für {} ({}) läuft in {} Tagen ab ({}).",
                    kind.label(),
                    plate,
                    vehicle.vehicle_type,
                    eval.days_left,
                    format_date(&date)
                )
            };
            reminders.push(reminder(
                vehicle,
                format!("{} {}: {}", kind.label(), plate, expiry_state(&eval)),
                description,
                &eval,
            ));
        }
    }

    if !vehicle.is_truck() {
        return reminders;
    }

    if let Some(next_read) = vehicle.tachograph_next_read {
        if let Some(eval) = TACHOGRAPH_READ_RULE.evaluate(next_read, today) {
            let (state, description) = if eval.is_expired() {
                (
                    "Auslesen überfällig",
                    format!(
                        "Tachograph für {} muss seit {} Tagen ausgelesen werden!",
                        plate,
                        eval.days_overdue()
                    ),
                )
            } else {
                (
                    "Auslesen erforderlich",
                    format!(
                        "Tachograph für {} muss in {} Tagen ausgelesen werden ({}).",
                        plate,
                        eval.days_left,
                        format_date(&next_read)
                    ),
                )
            };
            reminders.push(reminder(
                vehicle,
                format!("Tachograph {}: {}", plate, state),
                description,
                &eval,
            ));
        }
    }

    if let Some(next_check) = vehicle.tachograph_next_check {
        if let Some(eval) = TACHOGRAPH_CALIBRATION_RULE.evaluate(next_check, today) {
            let (state, description) = if eval.is_expired() {
                (
                    "Kalibrierung überfällig",
                    format!(
                        "Tachograph-Kalibrierung für {} ist seit {} Tagen überfällig!",
                        plate,
                        eval.days_overdue()
                    ),
                )
            } else {
                (
                    "Kalibrierung erforderlich",
                    format!(
                        "Tachograph-Kalibrierung für {} ist in {} Tagen fällig ({}).",
                        plate,
                        eval.days_left,
                        format_date(&next_check)
                    ),
                )
            };
            reminders.push(reminder(
                vehicle,
                format!("Tachograph {}: {}", plate, state),
                description,
                &eval,
            ));
        }
    }

    reminders
}

fn reminder(
    vehicle: &Vehicle,
    title: String,
    description: String,
    eval: &DeadlineEvaluation,
) -> ReminderCandidate {
    let mut candidate = ReminderCandidate::from_evaluation(
        title,
        description,
        TaskCategory::Vehicle,
        FLEET_ASSIGNEE,
        eval,
    );
    candidate.vehicle_id = Some(vehicle.id.clone());
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use enterprise_planner_domain::{date::add_days, TaskPriority};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn vehicle(vehicle_type: &str) -> Vehicle {
        Vehicle::new("B-XY 1".into(), vehicle_type.into(), Utc::now())
    }

    #[test]
    fn expired_tuv_is_critical_and_due_today() {
        let mut v = vehicle("PKW");
        v.tuv_date = Some(add_days(today(), -10));

        let reminders = vehicle_reminders(&v, today());
        assert_eq!(reminders.len(), 1);
        let r = &reminders[0];
        assert_eq!(r.title, "TÜV B-XY 1: abgelaufen");
        assert_eq!(r.description, "TÜV für B-XY 1 (PKW) ist seit 10 Tagen abgelaufen!");
        assert_eq!(r.priority, TaskPriority::Critical);
        assert_eq!(r.due_date, today());
        assert_eq!(r.assignee, "Fahrzeugverwaltung");
        assert_eq!(r.vehicle_id, Some(v.id.clone()));
    }

    #[test]
    fn inspections_are_checked_independently() {
        let mut v = vehicle("PKW");
        v.au_date = Some(add_days(today(), 20));
        v.uvv_date = Some(add_days(today(), 45));
        v.tuv_date = Some(add_days(today(), 90));

        let reminders = vehicle_reminders(&v, today());
        assert_eq!(reminders.len(), 2);
        assert_eq!(reminders[0].title, "AU B-XY 1: läuft bald ab");
        assert_eq!(reminders[0].priority, TaskPriority::High);
        assert_eq!(reminders[0].due_date, add_days(today(), 14));
        assert_eq!(reminders[1].title, "UVV B-XY 1: läuft bald ab");
        assert_eq!(reminders[1].priority, TaskPriority::Medium);
    }

    #[test]
    fn tachograph_deadlines_only_apply_to_trucks() {
        let mut v = vehicle("Transporter");
        v.tachograph_next_read = Some(add_days(today(), 3));
        v.tachograph_next_check = Some(add_days(today(), -2));
        assert!(vehicle_reminders(&v, today()).is_empty());

        v.vehicle_type = "LKW".into();
        let reminders = vehicle_reminders(&v, today());
        assert_eq!(reminders.len(), 2);
        assert_eq!(reminders[0].title, "Tachograph B-XY 1: Auslesen erforderlich");
        assert_eq!(reminders[0].priority, TaskPriority::High);
        assert_eq!(reminders[0].due_date, add_days(today(), 3));
        assert_eq!(reminders[1].title, "Tachograph B-XY 1: Kalibrierung überfällig");
        assert_eq!(reminders[1].priority, TaskPriority::Critical);
    }
}
