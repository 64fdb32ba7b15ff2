use std::sync::Arc;

use crate::models::{NotificationDraft, NotificationType};
use crate::store::NotificationStore;

/// Longest message preview stored in a notification description.
const PREVIEW_LIMIT: usize = 50;

/// Producer-facing convenience layer over the notification store. The
/// messaging and booking subsystems call these helpers on their events;
/// the service holds no state of its own.
#[derive(Clone)]
pub struct NotificationService {
    store: Arc<dyn NotificationStore>,
}

impl NotificationService {
    pub fn new(store: Arc<dyn NotificationStore>) -> Self {
        Self { store }
    }

    /// Notify about a new inbound message. The preview is truncated to
    /// [`PREVIEW_LIMIT`] characters with an ellipsis suffix when longer; the
    /// link targets the conversation when an id is supplied, otherwise the
    /// generic messages view.
    pub fn notify_new_message(&self, sender: &str, preview: &str, conversation_id: Option<&str>) {
        let link = match conversation_id {
            Some(id) => format!("/messages/{}", id),
            None => "/messages".to_string(),
        };

        tracing::info!(sender, "new message notification");
        self.store.append(NotificationDraft::new(
            format!("New message from {}", sender),
            truncate_preview(preview),
            NotificationType::Message,
            Some(link),
        ));
    }

    /// Notify about a booking lifecycle event (created, confirmed,
    /// cancelled). Title and description come from the booking subsystem.
    pub fn notify_booking_event(&self, title: &str, description: &str) {
        tracing::info!(title, "booking notification");
        self.store.append(NotificationDraft::new(
            title,
            description,
            NotificationType::Booking,
            Some("/bookings".to_string()),
        ));
    }
}

fn truncate_preview(preview: &str) -> String {
    if preview.chars().count() <= PREVIEW_LIMIT {
        preview.to_string()
    } else {
        let truncated: String = preview.chars().take(PREVIEW_LIMIT).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_preview_unchanged() {
        let preview = "Looking forward to our session";
        assert_eq!(truncate_preview(preview), preview);
    }

    #[test]
    fn test_preview_at_limit_unchanged() {
        let preview: String = "x".repeat(50);
        assert_eq!(truncate_preview(&preview), preview);
    }

    #[test]
    fn test_long_preview_truncated_with_ellipsis() {
        let preview: String = "y".repeat(80);
        let stored = truncate_preview(&preview);
        assert_eq!(stored.chars().count(), 53);
        assert!(stored.ends_with("..."));
        assert!(stored.starts_with(&"y".repeat(50)));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let preview: String = "é".repeat(60);
        let stored = truncate_preview(&preview);
        assert_eq!(stored.chars().count(), 53);
    }
}
