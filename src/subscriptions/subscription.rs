use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::subscriptions::common::{Displayable, Identifiable, NamedEntity};
use crate::subscriptions::Category;

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Recurrence period governing how often a subscription charges its price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn label(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "Mensal",
            BillingCycle::Yearly => "Anual",
        }
    }
}

/// A recurring subscription record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subscription {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub billing_cycle: BillingCycle,
    pub category: Category,
    pub next_billing_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Subscription {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        billing_cycle: BillingCycle,
        category: Category,
        next_billing_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
            billing_cycle,
            category,
            next_billing_date,
            description: None,
            logo: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    /// Amount charged per month. Yearly prices are spread over twelve
    /// months; together with [`Subscription::yearly_equivalent`] this is the
    /// single source of truth for cross-cycle aggregation.
    pub fn monthly_equivalent(&self) -> f64 {
        match self.billing_cycle {
            BillingCycle::Monthly => self.price,
            BillingCycle::Yearly => self.price / MONTHS_PER_YEAR,
        }
    }

    /// Amount charged per year.
    pub fn yearly_equivalent(&self) -> f64 {
        match self.billing_cycle {
            BillingCycle::Monthly => self.price * MONTHS_PER_YEAR,
            BillingCycle::Yearly => self.price,
        }
    }

    /// Merges the set fields of `patch` into the record and refreshes
    /// `updated_at`.
    pub fn apply(&mut self, patch: SubscriptionPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(billing_cycle) = patch.billing_cycle {
            self.billing_cycle = billing_cycle;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(next_billing_date) = patch.next_billing_date {
            self.next_billing_date = next_billing_date;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(logo) = patch.logo {
            self.logo = Some(logo);
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        self.updated_at = Utc::now();
    }
}

impl Identifiable for Subscription {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Subscription {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Subscription {
    fn display_label(&self) -> String {
        let state = if self.is_active { "active" } else { "inactive" };
        format!("{} [{}]", self.name, state)
    }
}

/// Partial update for a subscription; unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubscriptionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<BillingCycle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_billing_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl SubscriptionPatch {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn reprice(price: f64) -> Self {
        Self {
            price: Some(price),
            ..Self::default()
        }
    }
}
