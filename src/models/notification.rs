use rand::Rng;
use serde::{Deserialize, Serialize};

/// Notification type representing the kind of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Message,
    Booking,
    Reminder,
    System,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Message => "message",
            NotificationType::Booking => "booking",
            NotificationType::Reminder => "reminder",
            NotificationType::System => "system",
        }
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for NotificationType {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "message" => NotificationType::Message,
            "booking" => NotificationType::Booking,
            "reminder" => NotificationType::Reminder,
            _ => NotificationType::System, // Default fallback
        }
    }
}

/// A single stored notification record.
///
/// Field names serialize camelCase: the serialized form is the persisted
/// contract shared with anything else reading the notification slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub link: Option<String>,
    pub created_at: String, // RFC 3339 timestamp, lexicographically sortable
    pub read: bool,
    /// Display label frozen at creation. Stale by design; callers wanting an
    /// accurate label recompute from `created_at` at render time.
    pub time: String,
}

/// The candidate shape producers hand to the store. The store fills in
/// `id`, `read`, `created_at` and `time` on append.
#[derive(Debug, Clone)]
pub struct NotificationDraft {
    pub title: String,
    pub description: String,
    pub notification_type: NotificationType,
    pub link: Option<String>,
}

impl NotificationDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        notification_type: NotificationType,
        link: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            notification_type,
            link,
        }
    }

    /// Promote the draft to a full record with freshly generated defaults.
    pub fn into_notification(self) -> Notification {
        let now = time::OffsetDateTime::now_utc();
        let created_at = now
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap();

        Notification {
            id: generate_id(now),
            title: self.title,
            description: self.description,
            notification_type: self.notification_type,
            link: self.link,
            created_at,
            read: false,
            time: "Just now".to_string(),
        }
    }
}

/// Millisecond timestamp plus a random hex suffix. Unique within the
/// collection in practice, not cryptographically guaranteed.
fn generate_id(now: time::OffsetDateTime) -> String {
    let millis = now.unix_timestamp_nanos() / 1_000_000;
    let suffix: u32 = rand::thread_rng().gen();
    format!("{}-{:08x}", millis, suffix)
}
