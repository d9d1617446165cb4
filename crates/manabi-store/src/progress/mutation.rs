use manabi_model::id::{DocumentId, UserId};

use crate::course;
use crate::document::write_json;
use crate::error::StoreError;
use crate::keys;
use crate::kv::KeyValueStore;
use crate::progress::error::ProgressError;
use crate::progress::query::Query;

pub struct Mutation;

impl Mutation {
    /// Flips the completion flag for one content item, then rebuilds the
    /// derived views: the `course_<id>_progress` map and the `progress`
    /// field embedded in the course document.
    ///
    /// The flag write is the one that matters. If the course is gone the
    /// flag still sticks, matching the store-wide rule that nobody checks
    /// content ids against a live course.
    pub fn set_content_completed<S: KeyValueStore + ?Sized>(
        store: &S,
        course_id: DocumentId,
        content_id: DocumentId,
        completed: bool,
    ) -> Result<(), ProgressError> {
        let flag = if completed { "true" } else { "false" };
        store.set(&keys::content_completed(content_id), flag)?;

        let mut courses = course::Query::load_all(store);
        let Some(course) = courses.iter_mut().find(|course| course.id == course_id) else {
            tracing::warn!(course = %course_id, content = %content_id, "completion flag kept for unknown course");
            return Ok(());
        };

        let derived = Query::course_progress(store, course);
        write_json(store, &keys::course_progress(course_id), &derived)?;
        course.progress = Some(derived);
        course::Mutation::save_all(store, &courses)?;

        tracing::debug!(course = %course_id, content = %content_id, completed, "recorded progress");
        Ok(())
    }

    /// Upserts one course's percent into the user's rollup map.
    pub fn record_user_progress<S: KeyValueStore + ?Sized>(
        store: &S,
        user_id: &UserId,
        course_id: DocumentId,
        percent: u8,
    ) -> Result<(), StoreError> {
        let mut progress = Query::user_progress(store, user_id);
        progress.insert(course_id, percent);
        write_json(store, &keys::user_progress(user_id), &progress)
    }
}
