//! Calendar arithmetic for billing dates.

use chrono::{Datelike, Duration, NaiveDate};

use crate::errors::TrackerError;

pub const BILLING_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a raw billing date in `YYYY-MM-DD` form.
pub fn parse_billing_date(raw: &str) -> Result<NaiveDate, TrackerError> {
    NaiveDate::parse_from_str(raw.trim(), BILLING_DATE_FORMAT)
        .map_err(|_| TrackerError::InvalidDate(raw.trim().to_string()))
}

/// Whole days from `reference` to `target`: positive in the future, zero
/// today, negative when overdue.
pub fn days_until(target: NaiveDate, reference: NaiveDate) -> i64 {
    (target - reference).num_days()
}

/// Strict variant over a raw date string; callers decide whether to surface
/// the parse failure or default.
pub fn days_until_str(raw: &str, reference: NaiveDate) -> Result<i64, TrackerError> {
    parse_billing_date(raw).map(|target| days_until(target, reference))
}

/// Lenient variant: an unparseable date logs a warning and counts as due
/// today, so one malformed record cannot poison a whole view.
pub fn days_until_or_zero(raw: &str, reference: NaiveDate) -> i64 {
    match days_until_str(raw, reference) {
        Ok(days) => days,
        Err(err) => {
            tracing::warn!(%err, "unparseable billing date, defaulting to due today");
            0
        }
    }
}

/// Moves a billing date that already passed forward by one calendar month;
/// dates on or after `reference` are returned unchanged, so the operation
/// is idempotent once the date is current.
pub fn advance_if_past(date: NaiveDate, reference: NaiveDate) -> NaiveDate {
    if date < reference {
        shift_month(date, 1)
    } else {
        date
    }
}

/// Shifts a date by whole calendar months, clamping the day-of-month to the
/// last valid day of the target month (Jan 31 + 1 → Feb 28/29).
pub fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let month_index = date.year() * 12 + date.month() as i32 - 1 + months;
    let year = month_index.div_euclid(12);
    let month = month_index.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    match NaiveDate::from_ymd_opt(next_year, next_month, 1) {
        Some(first_of_next) => (first_of_next - Duration::days(1)).day(),
        None => 28,
    }
}
