//! Pure reductions from a subscription snapshot to dashboard view-models.
//!
//! Every function here is total over any well-formed input, including the
//! empty list, and never mutates the snapshot it is handed.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::subscriptions::{Category, Subscription};

/// Sum of monthly-equivalent amounts over active subscriptions.
pub fn monthly_total(subscriptions: &[Subscription]) -> f64 {
    subscriptions
        .iter()
        .filter(|sub| sub.is_active)
        .map(Subscription::monthly_equivalent)
        .sum()
}

/// Sum of yearly-equivalent amounts over active subscriptions.
pub fn yearly_total(subscriptions: &[Subscription]) -> f64 {
    subscriptions
        .iter()
        .filter(|sub| sub.is_active)
        .map(Subscription::yearly_equivalent)
        .sum()
}

/// Monthly-equivalent spend per category over active subscriptions.
/// Categories whose total is zero are omitted, so the values always sum to
/// [`monthly_total`].
pub fn totals_by_category(subscriptions: &[Subscription]) -> BTreeMap<Category, f64> {
    let mut totals: BTreeMap<Category, f64> = BTreeMap::new();
    for sub in subscriptions.iter().filter(|sub| sub.is_active) {
        *totals.entry(sub.category).or_insert(0.0) += sub.monthly_equivalent();
    }
    totals.retain(|_, total| *total > 0.0);
    totals
}

/// Average monthly-equivalent spend per active subscription in each
/// category. Categories with no active subscription are omitted; the
/// division is guarded structurally because entries only exist for
/// categories that contributed at least one record.
pub fn average_by_category(subscriptions: &[Subscription]) -> BTreeMap<Category, f64> {
    let mut sums: BTreeMap<Category, (f64, usize)> = BTreeMap::new();
    for sub in subscriptions.iter().filter(|sub| sub.is_active) {
        let entry = sums.entry(sub.category).or_insert((0.0, 0));
        entry.0 += sub.monthly_equivalent();
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(category, (sum, count))| (category, sum / count as f64))
        .collect()
}

/// Categories ranked by monthly spend, highest first. Ties break by the
/// category declaration order so the ranking is deterministic regardless of
/// input order.
pub fn ranked_categories(subscriptions: &[Subscription]) -> Vec<(Category, f64)> {
    let mut ranked: Vec<(Category, f64)> = totals_by_category(subscriptions).into_iter().collect();
    ranked.sort_by(|(category_a, total_a), (category_b, total_b)| {
        total_b
            .partial_cmp(total_a)
            .unwrap_or(Ordering::Equal)
            .then(category_a.cmp(category_b))
    });
    ranked
}

/// The `limit` highest-spend categories.
pub fn top_categories(subscriptions: &[Subscription], limit: usize) -> Vec<(Category, f64)> {
    let mut ranked = ranked_categories(subscriptions);
    ranked.truncate(limit);
    ranked
}

/// Aggregated dashboard statistics for one subscription snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendSummary {
    pub monthly_total: f64,
    pub yearly_total: f64,
    pub active_count: usize,
    pub inactive_count: usize,
    pub totals_by_category: BTreeMap<Category, f64>,
    pub average_by_category: BTreeMap<Category, f64>,
}

impl SpendSummary {
    pub fn from_subscriptions(subscriptions: &[Subscription]) -> Self {
        let active_count = subscriptions.iter().filter(|sub| sub.is_active).count();
        Self {
            monthly_total: monthly_total(subscriptions),
            yearly_total: yearly_total(subscriptions),
            active_count,
            inactive_count: subscriptions.len() - active_count,
            totals_by_category: totals_by_category(subscriptions),
            average_by_category: average_by_category(subscriptions),
        }
    }

    pub fn total_count(&self) -> usize {
        self.active_count + self.inactive_count
    }
}
