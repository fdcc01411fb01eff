pub mod json_backend;

use std::path::Path;

use crate::{errors::TrackerError, subscriptions::SubscriptionBook};

pub type Result<T> = std::result::Result<T, TrackerError>;

/// Abstraction over persistence backends capable of storing subscription
/// books and snapshots.
pub trait StorageBackend: Send + Sync {
    fn save(&self, book: &SubscriptionBook, name: &str) -> Result<()>;
    fn load(&self, name: &str) -> Result<SubscriptionBook>;
    fn list_backups(&self, name: &str) -> Result<Vec<String>>;
    fn backup(&self, book: &SubscriptionBook, name: &str, note: Option<&str>) -> Result<()>;
    fn restore(&self, name: &str, backup_name: &str) -> Result<SubscriptionBook>;

    /// Optional helpers for ad-hoc file operations. Default implementations
    /// forward to the plain JSON codec when not overridden.
    fn save_to_path(&self, book: &SubscriptionBook, path: &Path) -> Result<()> {
        json_backend::save_book_to_path(book, path)
    }

    fn load_from_path(&self, path: &Path) -> Result<SubscriptionBook> {
        json_backend::load_book_from_path(path)
    }
}

pub use json_backend::{book_warnings, JsonStorage};
