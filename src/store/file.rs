use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::models::{Notification, NotificationDraft};
use crate::store::{NotificationStore, DEFAULT_CAPACITY};

/// Internal read-path taxonomy. Never crosses the trait surface; callers of
/// the store only ever observe the degraded empty-list behavior.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read notification file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed notification payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// File-backed notification store.
///
/// A single JSON file holds the serialized array, newest first, capped at
/// `capacity`. Every mutation is a full read-modify-write of the whole
/// collection; correctness assumes a single active writer over the file at
/// a time (there is no cross-process coordination).
pub struct FileStore {
    path: PathBuf,
    capacity: usize,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_capacity(path, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(path: impl Into<PathBuf>, capacity: usize) -> Self {
        Self {
            path: path.into(),
            capacity: capacity.max(1),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<Notification>, StoreError> {
        let payload = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&payload)?)
    }

    /// Read the collection, degrading to empty on any failure. A missing
    /// file is the normal first-run state and is not logged.
    fn load_or_empty(&self) -> Vec<Notification> {
        match self.load() {
            Ok(notifications) => notifications,
            Err(StoreError::Io(err)) if err.kind() == ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "discarding unreadable notification state");
                Vec::new()
            }
        }
    }

    /// Serialize and write the whole collection, truncating to capacity
    /// first. Write failures are logged and swallowed; the next successful
    /// save supersedes whatever is on disk.
    fn save(&self, mut notifications: Vec<Notification>) {
        notifications.truncate(self.capacity);
        match serde_json::to_string(&notifications) {
            Ok(payload) => {
                if let Err(err) = fs::write(&self.path, payload) {
                    tracing::warn!(path = %self.path.display(), error = %err, "failed to persist notifications");
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to serialize notifications");
            }
        }
    }
}

impl NotificationStore for FileStore {
    fn list(&self) -> Vec<Notification> {
        self.load_or_empty()
    }

    fn append(&self, draft: NotificationDraft) {
        let notification = draft.into_notification();
        tracing::debug!(id = %notification.id, kind = %notification.notification_type, "appending notification");

        let mut notifications = self.load_or_empty();
        notifications.insert(0, notification);
        self.save(notifications);
    }

    fn mark_read(&self, id: &str) {
        let mut notifications = self.load_or_empty();
        if let Some(notification) = notifications.iter_mut().find(|n| n.id == id) {
            notification.read = true;
            self.save(notifications);
        }
    }

    fn mark_all_read(&self) {
        let mut notifications = self.load_or_empty();
        for notification in &mut notifications {
            notification.read = true;
        }
        self.save(notifications);
    }

    fn unread_count(&self) -> usize {
        self.load_or_empty().iter().filter(|n| !n.read).count()
    }

    fn clear(&self) {
        if let Err(err) = fs::remove_file(&self.path) {
            if err.kind() != ErrorKind::NotFound {
                tracing::warn!(path = %self.path.display(), error = %err, "failed to clear notifications");
            }
        }
    }
}
