use crate::compliance::{DeadlineRule, CERTIFICATE_RULE};
use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, NaiveDate, Utc};

/// An organizational certificate, e.g. an ISO 9001 audit
#[derive(Debug, Clone, PartialEq)]
pub struct Certificate {
    pub id: ID,
    pub name: String,
    pub issuer: Option<String>,
    pub issued_date: Option<NaiveDate>,
    pub certificate_type: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    /// Days before expiry from which on reminders are raised
    pub reminder_days: Option<i64>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Certificate {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Certificate {
    pub fn new(name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Default::default(),
            name,
            issuer: None,
            issued_date: None,
            certificate_type: None,
            expiry_date: None,
            reminder_days: None,
            description: None,
            created_at,
        }
    }

    /// Unset or zero falls back to the default window
    pub fn reminder_days(&self) -> i64 {
        match self.reminder_days {
            Some(days) if days > 0 => days,
            _ => CERTIFICATE_RULE.lookback_days,
        }
    }

    pub fn deadline_rule(&self) -> DeadlineRule {
        CERTIFICATE_RULE.with_lookback(self.reminder_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reminder_window_defaults_to_thirty_days() {
        let mut certificate = Certificate::new("ISO 9001".into(), Utc::now());
        assert_eq!(certificate.reminder_days(), 30);
        certificate.reminder_days = Some(0);
        assert_eq!(certificate.deadline_rule().lookback_days, 30);
        certificate.reminder_days = Some(10);
        assert_eq!(certificate.deadline_rule().lookback_days, 10);
    }
}
