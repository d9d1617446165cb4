use chrono::Utc;

use manabi_model::id::{DocumentId, UserId};
use manabi_model::notification::{NewNotification, Notification};

use crate::document::{next_document_id, read_or_default, write_json};
use crate::keys;
use crate::kv::KeyValueStore;
use crate::notification::error::NotificationError;
use crate::notification::NotificationLog;

pub struct Mutation;

impl Mutation {
    /// Prepends to the user's queue with a fresh id, unread, stamped now.
    pub fn push<S: KeyValueStore + ?Sized>(
        store: &S,
        user_id: &UserId,
        new: NewNotification,
    ) -> Result<Notification, NotificationError> {
        let mut log: NotificationLog = read_or_default(store, keys::NOTIFICATIONS);
        let queue = log.entry(user_id.clone()).or_default();
        let id = next_document_id(queue.iter().map(|notification| notification.id));
        let notification = Notification {
            id,
            r#type: new.r#type,
            course_id: new.course_id,
            message: new.message,
            is_read: false,
            timestamp: Utc::now(),
        };
        queue.insert(0, notification.clone());
        write_json(store, keys::NOTIFICATIONS, &log)?;
        tracing::debug!(user = %user_id, notification = %id, "pushed notification");
        Ok(notification)
    }

    /// Flips one notification to read.
    pub fn mark_read<S: KeyValueStore + ?Sized>(
        store: &S,
        user_id: &UserId,
        notification_id: DocumentId,
    ) -> Result<(), NotificationError> {
        let mut log: NotificationLog = read_or_default(store, keys::NOTIFICATIONS);
        let notification = log
            .get_mut(user_id)
            .and_then(|queue| {
                queue
                    .iter_mut()
                    .find(|notification| notification.id == notification_id)
            })
            .ok_or(NotificationError::NotFound(notification_id))?;
        notification.is_read = true;
        write_json(store, keys::NOTIFICATIONS, &log)?;
        Ok(())
    }
}
