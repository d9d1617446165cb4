use manabi_model::id::UserId;
use manabi_model::notification::Notification;

use crate::document::read_or_default;
use crate::keys;
use crate::kv::KeyValueStore;
use crate::notification::NotificationLog;

pub struct Query;

impl Query {
    /// The user's queue, most recent first, exactly as stored.
    #[must_use]
    pub fn list<S: KeyValueStore + ?Sized>(store: &S, user_id: &UserId) -> Vec<Notification> {
        let mut log: NotificationLog = read_or_default(store, keys::NOTIFICATIONS);
        log.shift_remove(user_id).unwrap_or_default()
    }

    #[must_use]
    pub fn unread_count<S: KeyValueStore + ?Sized>(store: &S, user_id: &UserId) -> usize {
        Self::list(store, user_id)
            .iter()
            .filter(|notification| !notification.is_read)
            .count()
    }
}
