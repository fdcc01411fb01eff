mod common;

use common::date;
use subtrack_core::errors::TrackerError;
use subtrack_core::subscriptions::schedule::{
    advance_if_past, days_in_month, days_until, days_until_or_zero, days_until_str,
    parse_billing_date, shift_month,
};

#[test]
fn days_until_is_zero_for_the_same_date() {
    let today = date(2025, 3, 10);
    assert_eq!(days_until(today, today), 0);
}

#[test]
fn days_until_counts_forward_and_backward() {
    let reference = date(2025, 3, 10);
    assert_eq!(days_until(date(2025, 3, 11), reference), 1);
    assert_eq!(days_until(date(2025, 3, 9), reference), -1);
    assert_eq!(days_until(date(2025, 4, 10), reference), 31);
}

#[test]
fn parse_billing_date_accepts_iso_dates() {
    assert_eq!(parse_billing_date("2024-12-15").unwrap(), date(2024, 12, 15));
    assert_eq!(parse_billing_date(" 2024-01-02 ").unwrap(), date(2024, 1, 2));
}

#[test]
fn parse_billing_date_rejects_garbage() {
    let err = parse_billing_date("not-a-date").expect_err("must not parse");
    assert!(matches!(err, TrackerError::InvalidDate(ref raw) if raw == "not-a-date"));
    assert!(parse_billing_date("2024-13-40").is_err());
}

#[test]
fn days_until_str_propagates_parse_failures() {
    let reference = date(2025, 3, 10);
    assert_eq!(days_until_str("2025-03-13", reference).unwrap(), 3);
    assert!(days_until_str("13/03/2025", reference).is_err());
}

#[test]
fn days_until_or_zero_defaults_malformed_dates_to_today() {
    let reference = date(2025, 3, 10);
    assert_eq!(days_until_or_zero("2025-03-17", reference), 7);
    assert_eq!(days_until_or_zero("invalid", reference), 0);
}

#[test]
fn advance_if_past_leaves_current_dates_alone() {
    let reference = date(2025, 3, 10);
    assert_eq!(advance_if_past(reference, reference), reference);
    assert_eq!(
        advance_if_past(date(2025, 4, 1), reference),
        date(2025, 4, 1)
    );
}

#[test]
fn advance_if_past_moves_one_month_forward() {
    let reference = date(2025, 3, 10);
    assert_eq!(
        advance_if_past(date(2025, 2, 20), reference),
        date(2025, 3, 20)
    );
}

#[test]
fn advance_if_past_is_idempotent_once_current() {
    let reference = date(2025, 3, 10);
    let advanced = advance_if_past(date(2025, 2, 20), reference);
    assert_eq!(advance_if_past(advanced, reference), advanced);
}

#[test]
fn shift_month_clamps_to_the_last_valid_day() {
    assert_eq!(shift_month(date(2025, 1, 31), 1), date(2025, 2, 28));
    assert_eq!(shift_month(date(2024, 1, 31), 1), date(2024, 2, 29));
    assert_eq!(shift_month(date(2024, 10, 31), 1), date(2024, 11, 30));
}

#[test]
fn shift_month_rolls_over_year_boundaries() {
    assert_eq!(shift_month(date(2024, 12, 15), 1), date(2025, 1, 15));
    assert_eq!(shift_month(date(2025, 1, 15), -1), date(2024, 12, 15));
    assert_eq!(shift_month(date(2024, 6, 30), 12), date(2025, 6, 30));
}

#[test]
fn days_in_month_handles_leap_years() {
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2025, 2), 28);
    assert_eq!(days_in_month(2025, 12), 31);
}
