use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::DocumentId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    NewContent,
    NewQuiz,
    Enrollment,
}

/// A per-user notification. Queues live most-recent-first under the shared
/// `notifications` document and are never capped or expired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: DocumentId,
    pub r#type: NotificationKind,
    pub course_id: DocumentId,
    pub message: String,
    pub is_read: bool,
    pub timestamp: DateTime<Utc>,
}

/// What a producer hands to the store; id, read flag and timestamp are
/// assigned on push.
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub r#type: NotificationKind,
    pub course_id: DocumentId,
    pub message: String,
}
