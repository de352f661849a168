use crate::date::{add_days, add_months};
use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceRecord {
    pub id: ID,
    pub vehicle_id: Option<ID>,
    /// What is maintained, e.g. "Hebebühne Halle 2"
    pub object: String,
    pub maintenance_type: Option<String>,
    pub last_maintenance: Option<NaiveDate>,
    pub next_maintenance: Option<NaiveDate>,
    /// Interval label as entered, see `MaintenanceInterval`
    pub interval: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for MaintenanceRecord {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// The maintenance intervals offered when entering a `MaintenanceRecord`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenanceInterval {
    OneWeek,
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
}

impl MaintenanceInterval {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "1 Woche" => Some(Self::OneWeek),
            "1 Monat" => Some(Self::OneMonth),
            "3 Monate" => Some(Self::ThreeMonths),
            "6 Monate" => Some(Self::SixMonths),
            "1 Jahr" => Some(Self::OneYear),
            _ => None,
        }
    }

    pub fn next_after(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::OneWeek => Some(add_days(date, 7)),
            Self::OneMonth => add_months(date, 1),
            Self::ThreeMonths => add_months(date, 3),
            Self::SixMonths => add_months(date, 6),
            Self::OneYear => add_months(date, 12),
        }
    }
}

impl MaintenanceRecord {
    pub fn new(object: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Default::default(),
            vehicle_id: None,
            object,
            maintenance_type: None,
            last_maintenance: None,
            next_maintenance: None,
            interval: None,
            description: None,
            notes: None,
            created_by: None,
            created_at,
        }
    }

    /// Derives `next_maintenance` from the last maintenance and the interval label.
    /// Unknown labels leave the record without a next date.
    pub fn schedule_next_maintenance(&mut self) {
        let interval = self.interval.as_deref().and_then(MaintenanceInterval::from_label);
        self.next_maintenance = match (self.last_maintenance, interval) {
            (Some(last), Some(interval)) => interval.next_after(last),
            _ => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn derives_next_maintenance_from_interval_label() {
        let cases = vec![
            ("1 Woche", Some(date(2024, 1, 8))),
            ("1 Monat", Some(date(2024, 2, 1))),
            ("3 Monate", Some(date(2024, 4, 1))),
            ("6 Monate", Some(date(2024, 7, 1))),
            ("1 Jahr", Some(date(2025, 1, 1))),
            ("alle 2 Wochen", None),
        ];

        for (label, expected) in cases {
            let mut record = MaintenanceRecord::new("Hebebühne".into(), Utc::now());
            record.last_maintenance = Some(date(2024, 1, 1));
            record.interval = Some(label.into());
            record.schedule_next_maintenance();
            assert_eq!(record.next_maintenance, expected, "interval {}", label);
        }
    }

    #[test]
    fn no_next_maintenance_without_last_maintenance() {
        let mut record = MaintenanceRecord::new("Kompressor".into(), Utc::now());
        record.interval = Some("1 Monat".into());
        record.schedule_next_maintenance();
        assert_eq!(record.next_maintenance, None);
    }
}
