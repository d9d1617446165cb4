//! The persisted key layout. This is the compatibility surface of the
//! store: every key written by any repository is produced here.

use manabi_model::id::{DocumentId, UserId};

/// JSON array of all courses, shared by every user.
pub const COURSES: &str = "courses";

/// JSON map of user id to that user's notification queue.
pub const NOTIFICATIONS: &str = "notifications";

/// The session document of the signed-in user.
pub const USER: &str = "user";

/// `"true"` / `"false"` completion flag for one content item. This is the
/// source of truth for progress; the per-course maps are derived from it.
#[must_use]
pub fn content_completed(content_id: DocumentId) -> String {
    format!("content_{content_id}_completed")
}

/// JSON map of content id to completion, derived per course.
#[must_use]
pub fn course_progress(course_id: DocumentId) -> String {
    format!("course_{course_id}_progress")
}

/// JSON array of course ids the user joined.
#[must_use]
pub fn enrollments(user_id: &UserId) -> String {
    format!("enrollments_{user_id}")
}

/// JSON map of course id to completion percent for one user.
#[must_use]
pub fn user_progress(user_id: &UserId) -> String {
    format!("progress_{user_id}")
}

/// JSON array of every quiz submission the user ever made.
#[must_use]
pub fn quiz_attempts(user_id: &UserId) -> String {
    format!("quiz_attempts_{user_id}")
}

/// JSON map of quiz id to the latest result for one user.
#[must_use]
pub fn quiz_results(user_id: &UserId) -> String {
    format!("quiz_results_{user_id}")
}
