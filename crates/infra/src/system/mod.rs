use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use enterprise_planner_domain::date::date_from_millis;

// Mocking out time so that it is possible to run tests that depend on time.
pub trait ISys: Send + Sync {
    /// The current timestamp in millis
    fn get_timestamp_millis(&self) -> i64;

    fn now(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.get_timestamp_millis())
            .single()
            .unwrap_or_else(Utc::now)
    }

    /// Today's calendar date in UTC
    fn today(&self) -> NaiveDate {
        date_from_millis(self.get_timestamp_millis())
    }
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// System with a fixed clock
pub struct StaticTimeSys {
    pub timestamp_millis: i64,
}

impl StaticTimeSys {
    /// A clock standing still at noon UTC of the given date
    pub fn at_date(date: NaiveDate) -> Self {
        let timestamp_millis = date
            .and_hms_opt(12, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis())
            .unwrap_or_default();
        Self { timestamp_millis }
    }
}

impl ISys for StaticTimeSys {
    fn get_timestamp_millis(&self) -> i64 {
        self.timestamp_millis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_clock_reports_its_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let sys = StaticTimeSys::at_date(date);
        assert_eq!(sys.today(), date);
        assert_eq!(sys.now().date_naive(), date);
    }
}
