//! Business logic helpers for managing subscription records.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::subscriptions::schedule::advance_if_past;
use crate::subscriptions::{Displayable, Subscription, SubscriptionBook, SubscriptionPatch};

/// Provides validated CRUD helpers for subscription books.
pub struct SubscriptionService;

impl SubscriptionService {
    /// Validates and inserts a subscription, returning its identifier.
    /// A billing date that already passed `reference` is advanced one
    /// calendar month so new records never start overdue.
    pub fn add(
        book: &mut SubscriptionBook,
        mut subscription: Subscription,
        reference: NaiveDate,
    ) -> ServiceResult<Uuid> {
        validate(&subscription.name, subscription.price)?;
        let normalized = advance_if_past(subscription.next_billing_date, reference);
        if normalized != subscription.next_billing_date {
            tracing::info!(
                subscription = %subscription.display_label(),
                from = %subscription.next_billing_date,
                to = %normalized,
                "billing date already passed, advanced one month"
            );
            subscription.next_billing_date = normalized;
        }
        Ok(book.add_subscription(subscription))
    }

    /// Merges the patch into the subscription identified by `id`.
    pub fn update(
        book: &mut SubscriptionBook,
        id: Uuid,
        patch: SubscriptionPatch,
    ) -> ServiceResult<()> {
        if let Some(name) = patch.name.as_deref() {
            if name.trim().is_empty() {
                return Err(ServiceError::Invalid("Name must not be empty".into()));
            }
        }
        if let Some(price) = patch.price {
            if price < 0.0 {
                return Err(ServiceError::Invalid("Price must not be negative".into()));
            }
        }
        let sub = book
            .subscription_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Subscription not found".into()))?;
        sub.apply(patch);
        book.touch();
        Ok(())
    }

    /// Removes the subscription identified by `id`, returning the removed
    /// instance.
    pub fn remove(book: &mut SubscriptionBook, id: Uuid) -> ServiceResult<Subscription> {
        book.remove_subscription(id)
            .ok_or_else(|| ServiceError::Invalid("Subscription not found".into()))
    }

    /// Flips the active flag, returning the new state.
    pub fn toggle(book: &mut SubscriptionBook, id: Uuid) -> ServiceResult<bool> {
        book.toggle_subscription(id)
            .ok_or_else(|| ServiceError::Invalid("Subscription not found".into()))
    }

    /// Snapshot of the book's subscriptions, newest first.
    pub fn list(book: &SubscriptionBook) -> Vec<&Subscription> {
        let mut subs: Vec<&Subscription> = book.subscriptions.iter().collect();
        subs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        subs
    }
}

fn validate(name: &str, price: f64) -> ServiceResult<()> {
    if name.trim().is_empty() {
        return Err(ServiceError::Invalid("Name must not be empty".into()));
    }
    if price < 0.0 {
        return Err(ServiceError::Invalid("Price must not be negative".into()));
    }
    Ok(())
}
