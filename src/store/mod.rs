use std::sync::Arc;

use crate::models::{Notification, NotificationDraft};

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Store for the notification collection.
///
/// All operations are synchronous and run to completion; every failure mode
/// degrades to "no notifications" instead of surfacing to the caller. The
/// trait exists so consumers can be handed an in-memory implementation when
/// no persistent backing is available (and in tests).
pub trait NotificationStore: Send + Sync {
    /// Full collection, newest first. Empty when nothing is persisted or the
    /// persisted payload cannot be read.
    fn list(&self) -> Vec<Notification>;

    /// Fill in generated fields, insert at the head, persist, and truncate
    /// to capacity (oldest dropped first).
    fn append(&self, draft: NotificationDraft);

    /// Mark a single notification as read. Unknown ids are a silent no-op.
    fn mark_read(&self, id: &str);

    /// Mark every notification as read.
    fn mark_all_read(&self);

    /// Count of unread notifications. Pure query.
    fn unread_count(&self) -> usize;

    /// Remove the persisted collection entirely.
    fn clear(&self);
}

pub type DynNotificationStore = Arc<dyn NotificationStore>;

/// Default retention cap; oldest entries beyond it are dropped on every save.
pub const DEFAULT_CAPACITY: usize = 50;
