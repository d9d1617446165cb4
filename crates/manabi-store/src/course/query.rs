use manabi_model::course::Course;
use manabi_model::id::DocumentId;

use crate::course::error::CourseError;
use crate::document::read_or_default;
use crate::keys;
use crate::kv::KeyValueStore;

pub struct Query;

impl Query {
    /// Loads the full catalog. An absent `courses` key and a document that
    /// no longer parses both come back as an empty list; the caller cannot
    /// tell silence from loss.
    #[must_use]
    pub fn load_all<S: KeyValueStore + ?Sized>(store: &S) -> Vec<Course> {
        read_or_default(store, keys::COURSES)
    }

    #[must_use]
    pub fn find_by_id(courses: &[Course], id: DocumentId) -> Option<&Course> {
        courses.iter().find(|course| course.id == id)
    }

    /// Looks a course up by a raw route parameter. The string is parsed
    /// into a [`DocumentId`] first; comparing `"42"` against `42` without
    /// that step is exactly the bug this boundary exists to prevent.
    pub fn find_by_route<'a>(courses: &'a [Course], raw_id: &str) -> Result<&'a Course, CourseError> {
        let id: DocumentId = raw_id.parse()?;
        Self::find_by_id(courses, id).ok_or(CourseError::CourseNotFound(id))
    }

    /// Courses owned by the given instructor, matched on the email stamped
    /// at creation time.
    #[must_use]
    pub fn find_by_instructor<'a>(courses: &'a [Course], instructor_email: &str) -> Vec<&'a Course> {
        courses
            .iter()
            .filter(|course| course.instructor_email.as_deref() == Some(instructor_email))
            .collect()
    }
}
