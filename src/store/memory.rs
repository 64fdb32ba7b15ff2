use std::sync::Mutex;

use crate::models::{Notification, NotificationDraft};
use crate::store::{NotificationStore, DEFAULT_CAPACITY};

/// In-memory notification store.
///
/// Drop-in substitute for [`super::FileStore`] when no persistent backing is
/// available, and the implementation tests inject. Same ordering and
/// capacity semantics, no durability.
pub struct MemoryStore {
    notifications: Mutex<Vec<Notification>>,
    capacity: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            notifications: Mutex::new(Vec::new()),
            capacity: capacity.max(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationStore for MemoryStore {
    fn list(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    fn append(&self, draft: NotificationDraft) {
        let mut notifications = self.notifications.lock().unwrap();
        notifications.insert(0, draft.into_notification());
        notifications.truncate(self.capacity);
    }

    fn mark_read(&self, id: &str) {
        let mut notifications = self.notifications.lock().unwrap();
        if let Some(notification) = notifications.iter_mut().find(|n| n.id == id) {
            notification.read = true;
        }
    }

    fn mark_all_read(&self) {
        for notification in self.notifications.lock().unwrap().iter_mut() {
            notification.read = true;
        }
    }

    fn unread_count(&self) -> usize {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| !n.read)
            .count()
    }

    fn clear(&self) {
        self.notifications.lock().unwrap().clear();
    }
}
