use super::check_rows;
use crate::compliance::reminder::{expiry_state, ReminderCandidate};
use chrono::NaiveDate;
use enterprise_planner_domain::{
    date::format_date, Certificate, CheckOutcome, ComplianceArea, TaskCategory,
};
use enterprise_planner_infra::PlannerContext;

const QUALITY_ASSIGNEE: &str = "Qualitätsmanagement";

pub async fn check_certificates(ctx: &PlannerContext, today: NaiveDate) -> CheckOutcome {
    let rows = ctx.repos.certificates.find_all().await;
    check_rows(ctx, ComplianceArea::Certificates, rows, |certificate| {
        certificate_reminders(certificate, today)
    })
    .await
}

pub fn certificate_reminders(
    certificate: &Certificate,
    today: NaiveDate,
) -> Vec<ReminderCandidate> {
    let expiry = match certificate.expiry_date {
        Some(expiry) => expiry,
        None => return Vec::new(),
    };
    let eval = match certificate.deadline_rule().evaluate(expiry, today) {
        Some(eval) => eval,
        None => return Vec::new(),
    };

    let subject = match &certificate.certificate_type {
        Some(certificate_type) => format!("Zertifikat \"{}\" ({})", certificate.name, certificate_type),
        None => format!("Zertifikat \"{}\"", certificate.name),
    };
    let description = if eval.is_expired() {
        format!("{} ist seit {} Tagen abgelaufen!", subject, eval.days_overdue())
    } else {
        format!(
            "{} läuft in {} Tagen ab ({}).",
            subject,
            eval.days_left,
            format_date(&expiry)
        )
    };

    vec![ReminderCandidate::from_evaluation(
        format!("Zertifikat {}: {}", certificate.name, expiry_state(&eval)),
        description,
        TaskCategory::Certificate,
        QUALITY_ASSIGNEE,
        &eval,
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use enterprise_planner_domain::{date::add_days, TaskPriority};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn certificate(expires_in: i64) -> Certificate {
        let mut c = Certificate::new("ISO 9001".into(), Utc::now());
        c.certificate_type = Some("QM".into());
        c.expiry_date = Some(add_days(today(), expires_in));
        c
    }

    #[test]
    fn default_window_is_30_days() {
        assert!(certificate_reminders(&certificate(31), today()).is_empty());

        let reminders = certificate_reminders(&certificate(20), today());
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].title, "Zertifikat ISO 9001: läuft bald ab");
        assert_eq!(reminders[0].priority, TaskPriority::High);
        assert_eq!(reminders[0].due_date, add_days(today(), 14));
        assert_eq!(reminders[0].assignee, "Qualitätsmanagement");
    }

    #[test]
    fn reminder_days_move_the_window() {
        let mut c = certificate(50);
        assert!(certificate_reminders(&c, today()).is_empty());
        c.reminder_days = Some(60);
        let reminders = certificate_reminders(&c, today());
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].priority, TaskPriority::Medium);

        c.reminder_days = Some(49);
        assert!(certificate_reminders(&c, today()).is_empty());
    }

    #[test]
    fn zero_reminder_days_use_the_default_window() {
        let mut c = certificate(5);
        c.reminder_days = Some(0);
        let reminders = certificate_reminders(&c, today());
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].priority, TaskPriority::Critical);
    }

    #[test]
    fn expired_certificate() {
        let reminders = certificate_reminders(&certificate(-4), today());
        assert_eq!(reminders[0].title, "Zertifikat ISO 9001: abgelaufen");
        assert_eq!(
            reminders[0].description,
            "Zertifikat \"ISO 9001\" (QM) ist seit 4 Tagen abgelaufen!"
        );
        assert_eq!(reminders[0].priority, TaskPriority::Critical);
        assert_eq!(reminders[0].due_date, today());
    }

    #[test]
    fn certificates_without_expiry_are_not_tracked() {
        let mut c = certificate(1);
        c.expiry_date = None;
        assert!(certificate_reminders(&c, today()).is_empty());
    }
}
