use crate::subscriptions::{aggregate, Category, SpendSummary, Subscription};

/// Read-side façade over the aggregate computations.
pub struct SummaryService;

impl SummaryService {
    pub fn summarize(subscriptions: &[Subscription]) -> SpendSummary {
        SpendSummary::from_subscriptions(subscriptions)
    }

    pub fn monthly_total(subscriptions: &[Subscription]) -> f64 {
        aggregate::monthly_total(subscriptions)
    }

    pub fn yearly_total(subscriptions: &[Subscription]) -> f64 {
        aggregate::yearly_total(subscriptions)
    }

    pub fn top_categories(subscriptions: &[Subscription], limit: usize) -> Vec<(Category, f64)> {
        aggregate::top_categories(subscriptions, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subscriptions::BillingCycle;
    use chrono::NaiveDate;

    fn subscriptions_with_mixed_cycles() -> Vec<Subscription> {
        let date = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap();
        vec![
            Subscription::new(
                "Netflix",
                45.90,
                BillingCycle::Monthly,
                Category::Streaming,
                date,
            ),
            Subscription::new(
                "Adobe Creative Cloud",
                89.90,
                BillingCycle::Yearly,
                Category::Software,
                date,
            ),
        ]
    }

    #[test]
    fn summarize_reports_expected_totals() {
        let subs = subscriptions_with_mixed_cycles();
        let summary = SummaryService::summarize(&subs);
        assert!((summary.monthly_total - (45.90 + 89.90 / 12.0)).abs() < 1e-9);
        assert_eq!(summary.active_count, 2);
        assert_eq!(summary.inactive_count, 0);
    }

    #[test]
    fn top_categories_respects_limit() {
        let subs = subscriptions_with_mixed_cycles();
        let top = SummaryService::top_categories(&subs, 1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].0, Category::Streaming);
    }
}
