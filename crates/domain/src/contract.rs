use crate::compliance::{DeadlineRule, CONTRACT_RULE};
use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Contract {
    pub id: ID,
    pub name: String,
    pub partner: String,
    pub contract_type: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Free text, e.g. "3 Monate zum Quartalsende"
    pub cancelation_period: Option<String>,
    pub reminder_days: Option<i64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Contract {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Contract {
    pub fn new(
        name: String,
        partner: String,
        contract_type: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Default::default(),
            name,
            partner,
            contract_type,
            start_date: None,
            end_date: None,
            cancelation_period: None,
            reminder_days: None,
            notes: None,
            created_at,
        }
    }

    /// Unset or zero falls back to the default window
    pub fn reminder_days(&self) -> i64 {
        match self.reminder_days {
            Some(days) if days > 0 => days,
            _ => CONTRACT_RULE.lookback_days,
        }
    }

    pub fn deadline_rule(&self) -> DeadlineRule {
        CONTRACT_RULE.with_lookback(self.reminder_days())
    }

    /// A contract may not end before it starts
    pub fn has_valid_term(&self) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => start <= end,
            _ => true,
        }
    }
}
