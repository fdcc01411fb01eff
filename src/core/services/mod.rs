pub mod alert_service;
pub mod settings_service;
pub mod subscription_service;
pub mod summary_service;

pub use alert_service::AlertService;
pub use settings_service::SettingsService;
pub use subscription_service::SubscriptionService;
pub use summary_service::SummaryService;

use crate::errors::TrackerError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Tracker(#[from] TrackerError),
    #[error("{0}")]
    Invalid(String),
}
