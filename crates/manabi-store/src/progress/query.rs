use indexmap::IndexMap;

use manabi_model::course::Course;
use manabi_model::id::{DocumentId, UserId};

use crate::document::read_or_default;
use crate::keys;
use crate::kv::KeyValueStore;

pub struct Query;

impl Query {
    /// Whether one content item is done. Anything but a stored `"true"`
    /// counts as not completed.
    #[must_use]
    pub fn is_content_completed<S: KeyValueStore + ?Sized>(store: &S, content_id: DocumentId) -> bool {
        store
            .get(&keys::content_completed(content_id))
            .is_some_and(|flag| flag == "true")
    }

    /// The completion map for a course, recomputed from the per-content
    /// flags. Stale ids that no longer appear in `course.contents` simply
    /// drop out of the view.
    #[must_use]
    pub fn course_progress<S: KeyValueStore + ?Sized>(store: &S, course: &Course) -> IndexMap<DocumentId, bool> {
        course
            .contents
            .iter()
            .map(|content| (content.id, Self::is_content_completed(store, content.id)))
            .collect()
    }

    /// Completion percent across a course's content items, rounded to the
    /// nearest integer. A course with no content is 0% by definition.
    #[must_use]
    pub fn course_progress_percent<S: KeyValueStore + ?Sized>(store: &S, course: &Course) -> u8 {
        let total = course.contents.len();
        if total == 0 {
            return 0;
        }
        let done = course
            .contents
            .iter()
            .filter(|content| Self::is_content_completed(store, content.id))
            .count();
        let percent = (done as f64) * 100.0 / (total as f64);
        percent.round() as u8
    }

    /// The per-user rollup map (course id to percent) under
    /// `progress_<userId>`.
    #[must_use]
    pub fn user_progress<S: KeyValueStore + ?Sized>(store: &S, user_id: &UserId) -> IndexMap<DocumentId, u8> {
        read_or_default(store, &keys::user_progress(user_id))
    }
}
