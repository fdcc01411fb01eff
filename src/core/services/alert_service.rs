use chrono::NaiveDate;

use crate::subscriptions::{
    alerts, RenewalAlert, Subscription, DEFAULT_RENEWAL_WINDOW_DAYS, UPCOMING_CHARGES_WINDOW_DAYS,
};

/// Read-side façade over the renewal alert selector.
pub struct AlertService;

impl AlertService {
    /// Renewals due within the default seven-day window.
    pub fn upcoming<'a>(
        subscriptions: &'a [Subscription],
        reference: NaiveDate,
    ) -> Vec<RenewalAlert<'a>> {
        alerts::upcoming_renewals(subscriptions, DEFAULT_RENEWAL_WINDOW_DAYS, reference)
    }

    pub fn upcoming_in_window<'a>(
        subscriptions: &'a [Subscription],
        window_days: i64,
        reference: NaiveDate,
    ) -> Vec<RenewalAlert<'a>> {
        alerts::upcoming_renewals(subscriptions, window_days, reference)
    }

    /// Total charged over the dashboard's thirty-day lookahead.
    pub fn upcoming_charge_total(subscriptions: &[Subscription], reference: NaiveDate) -> f64 {
        alerts::upcoming_charge_total(subscriptions, UPCOMING_CHARGES_WINDOW_DAYS, reference)
    }
}
