use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::subscriptions::aggregate::SpendSummary;
use crate::subscriptions::Subscription;

/// A named collection of subscription records, the aggregate persisted by
/// the storage layer. The book owns record identity; derived views are
/// computed from a snapshot of `subscriptions` and never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionBook {
    pub name: String,
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SubscriptionBook {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            subscriptions: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn add_subscription(&mut self, subscription: Subscription) -> Uuid {
        let id = subscription.id;
        self.subscriptions.push(subscription);
        self.touch();
        id
    }

    pub fn subscription(&self, id: Uuid) -> Option<&Subscription> {
        self.subscriptions.iter().find(|sub| sub.id == id)
    }

    pub fn subscription_mut(&mut self, id: Uuid) -> Option<&mut Subscription> {
        self.subscriptions.iter_mut().find(|sub| sub.id == id)
    }

    pub fn remove_subscription(&mut self, id: Uuid) -> Option<Subscription> {
        let index = self.subscriptions.iter().position(|sub| sub.id == id)?;
        let removed = self.subscriptions.remove(index);
        self.touch();
        Some(removed)
    }

    /// Flips `is_active`, returning the new state.
    pub fn toggle_subscription(&mut self, id: Uuid) -> Option<bool> {
        let sub = self.subscription_mut(id)?;
        sub.is_active = !sub.is_active;
        sub.updated_at = Utc::now();
        let state = sub.is_active;
        self.touch();
        Some(state)
    }

    pub fn active_subscriptions(&self) -> impl Iterator<Item = &Subscription> {
        self.subscriptions.iter().filter(|sub| sub.is_active)
    }

    pub fn summarize(&self) -> SpendSummary {
        SpendSummary::from_subscriptions(&self.subscriptions)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
