use chrono::NaiveDate;
use enterprise_planner_domain::{
    date::{format_date, parse_date},
    ID,
};
use tracing::warn;

/// Helpers for mapping between rows and domain types

/// Decodes an optional date column. Values that cannot be parsed are
/// treated as absent so that one malformed field does not hide the row.
pub fn date_column(table: &str, column: &str, value: Option<String>) -> Option<NaiveDate> {
    let value = value?;
    if value.trim().is_empty() {
        return None;
    }
    match parse_date(&value) {
        Ok(date) => Some(date),
        Err(e) => {
            warn!("Ignoring unparseable {}.{} value: {:?}", table, column, e);
            None
        }
    }
}

pub fn date_value(date: &Option<NaiveDate>) -> Option<String> {
    date.as_ref().map(format_date)
}

pub fn id_column(table: &str, value: &str) -> anyhow::Result<ID> {
    value
        .parse()
        .map_err(|e| anyhow::anyhow!("Malformed id in table {}: {}", table, e))
}

pub fn optional_id_column(table: &str, value: Option<String>) -> Option<ID> {
    let value = value?;
    match value.parse() {
        Ok(id) => Some(id),
        Err(e) => {
            warn!("Ignoring malformed reference in table {}: {}", table, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_dates_are_treated_as_absent() {
        assert_eq!(
            date_column("vehicles", "tuv_date", Some("2024-05-01".into())),
            NaiveDate::from_ymd_opt(2024, 5, 1)
        );
        assert_eq!(date_column("vehicles", "tuv_date", Some("01.05.2024".into())), None);
        assert_eq!(date_column("vehicles", "tuv_date", Some("".into())), None);
        assert_eq!(date_column("vehicles", "tuv_date", None), None);
    }
}
