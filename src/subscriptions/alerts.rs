//! Upcoming-renewal selection over a subscription snapshot.

use chrono::NaiveDate;

use crate::subscriptions::schedule::days_until;
use crate::subscriptions::Subscription;

/// Lookahead used by the renewal alert list.
pub const DEFAULT_RENEWAL_WINDOW_DAYS: i64 = 7;
/// Lookahead used by the dashboard's upcoming-charges panel.
pub const UPCOMING_CHARGES_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenewalStatus {
    Overdue,
    Upcoming,
    Future,
}

impl RenewalStatus {
    pub fn classify(billing: NaiveDate, reference: NaiveDate, window_days: i64) -> RenewalStatus {
        let days = days_until(billing, reference);
        if days < 0 {
            RenewalStatus::Overdue
        } else if days <= window_days {
            RenewalStatus::Upcoming
        } else {
            RenewalStatus::Future
        }
    }
}

/// A subscription due within the alert window.
#[derive(Debug, Clone)]
pub struct RenewalAlert<'a> {
    pub subscription: &'a Subscription,
    pub days_until_renewal: i64,
}

/// Active subscriptions due within `window_days` of `reference`, inclusive
/// on both ends: a renewal due today is included, overdue ones are not.
/// Ordered ascending by days until renewal; ties break by name,
/// case-insensitively. Recomputed fresh on every call.
pub fn upcoming_renewals<'a>(
    subscriptions: &'a [Subscription],
    window_days: i64,
    reference: NaiveDate,
) -> Vec<RenewalAlert<'a>> {
    let mut alerts: Vec<RenewalAlert<'a>> = subscriptions
        .iter()
        .filter(|sub| sub.is_active)
        .filter_map(|sub| {
            let days = days_until(sub.next_billing_date, reference);
            if (0..=window_days).contains(&days) {
                Some(RenewalAlert {
                    subscription: sub,
                    days_until_renewal: days,
                })
            } else {
                None
            }
        })
        .collect();
    alerts.sort_by(|a, b| {
        a.days_until_renewal.cmp(&b.days_until_renewal).then_with(|| {
            a.subscription
                .name
                .to_lowercase()
                .cmp(&b.subscription.name.to_lowercase())
        })
    });
    alerts
}

/// Sum of the raw charge amounts falling due inside the window. Charges are
/// not normalized here: a yearly renewal inside the window costs its full
/// yearly price.
pub fn upcoming_charge_total(
    subscriptions: &[Subscription],
    window_days: i64,
    reference: NaiveDate,
) -> f64 {
    upcoming_renewals(subscriptions, window_days, reference)
        .iter()
        .map(|alert| alert.subscription.price)
        .sum()
}
