//! Subscription domain models and the pure computations over them.

pub mod aggregate;
pub mod alerts;
pub mod book;
pub mod category;
pub mod common;
pub mod schedule;
pub mod subscription;

pub use aggregate::SpendSummary;
pub use alerts::{
    RenewalAlert, RenewalStatus, DEFAULT_RENEWAL_WINDOW_DAYS, UPCOMING_CHARGES_WINDOW_DAYS,
};
pub use book::SubscriptionBook;
pub use category::Category;
pub use common::{Displayable, Identifiable, NamedEntity};
pub use subscription::{BillingCycle, Subscription, SubscriptionPatch};
