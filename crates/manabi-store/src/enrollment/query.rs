use manabi_model::id::{DocumentId, UserId};

use crate::document::read_or_default;
use crate::keys;
use crate::kv::KeyValueStore;

pub struct Query;

impl Query {
    /// Course ids the user joined.
    #[must_use]
    pub fn enrollments<S: KeyValueStore + ?Sized>(store: &S, user_id: &UserId) -> Vec<DocumentId> {
        read_or_default(store, &keys::enrollments(user_id))
    }

    #[must_use]
    pub fn is_enrolled<S: KeyValueStore + ?Sized>(store: &S, user_id: &UserId, course_id: DocumentId) -> bool {
        Self::enrollments(store, user_id).contains(&course_id)
    }
}
