use chrono::prelude::*;
use chrono::{Duration, Months};

/// Parses a stored date. Values are expected as `YYYY-MM-DD`, but full
/// ISO-8601 timestamps are accepted as well and truncated to their date.
pub fn parse_date(datestr: &str) -> anyhow::Result<NaiveDate> {
    let datestr = datestr.trim();
    let date_part = match datestr.find('T') {
        Some(pos) => &datestr[..pos],
        None => datestr,
    };
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|e| anyhow::anyhow!("Invalid date: `{}` ({})", datestr, e))
}

/// Serde helper for optional dates as they come from forms: a date, `null`,
/// a missing field (together with `#[serde(default)]`) or an empty string
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = serde::Deserialize::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(date) => parse_date(date).map(Some).map_err(serde::de::Error::custom),
    }
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The UTC calendar date of a unix timestamp in millis
pub fn date_from_millis(timestamp_millis: i64) -> NaiveDate {
    match Utc.timestamp_millis_opt(timestamp_millis) {
        chrono::LocalResult::Single(dt) => dt.date_naive(),
        _ => NaiveDate::default(),
    }
}

/// Number of whole days from `from` until `to`. Negative when `to` is in the past.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// Adds calendar months, clamping to the last day of the resulting month
/// (e.g. 2024-01-31 + 1 month = 2024-02-29).
pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}
