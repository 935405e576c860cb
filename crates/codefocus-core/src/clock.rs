//! Calendar-day helpers.
//!
//! Every day boundary in the crate is a local calendar date rendered as a
//! `YYYY-MM-DD` key. Derivation functions take "today" as an explicit
//! argument; callers that want the live clock pass [`today()`].

use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::error::ValidationError;

/// Format used for date keys in the activity log and on disk.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// The current local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Render a date as its `YYYY-MM-DD` key.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` key.
///
/// # Errors
/// Returns [`ValidationError::InvalidDate`] for anything that is not a real
/// calendar date in that exact shape.
pub fn parse_date_key(key: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(key.trim(), DATE_KEY_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(key.to_string()))
}

/// `today` if given, otherwise the live clock.
pub fn resolve(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(self::today)
}

/// The Sunday on or before `date`. Weeks start on Sunday everywhere.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// The calendar day before `date`.
pub fn previous_day(date: NaiveDate) -> NaiveDate {
    date.pred_opt().unwrap_or(date)
}
