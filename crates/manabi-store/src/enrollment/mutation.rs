use manabi_model::course::StudentRef;
use manabi_model::id::DocumentId;

use crate::course;
use crate::document::write_json;
use crate::enrollment::error::EnrollmentError;
use crate::enrollment::query::Query;
use crate::error::StoreError;
use crate::keys;
use crate::kv::KeyValueStore;

pub struct Mutation;

impl Mutation {
    /// Saves the user's enrollment list and rebuilds the mirror: the user
    /// is removed from every course's `enrolledStudents` and re-added to
    /// the courses the list names. Two documents, written independently.
    pub fn save_enrollments<S: KeyValueStore + ?Sized>(
        store: &S,
        student: &StudentRef,
        enrollments: &[DocumentId],
    ) -> Result<(), StoreError> {
        write_json(store, &keys::enrollments(&student.id), &enrollments)?;

        let mut courses = course::Query::load_all(store);
        for course in &mut courses {
            course.enrolled_students.retain(|entry| entry.id != student.id);
            if enrollments.contains(&course.id) {
                course.enrolled_students.push(student.clone());
            }
        }
        course::Mutation::save_all(store, &courses)
    }

    /// Joins one course. Enrolling twice is a no-op.
    pub fn enroll<S: KeyValueStore + ?Sized>(
        store: &S,
        student: &StudentRef,
        course_id: DocumentId,
    ) -> Result<Vec<DocumentId>, EnrollmentError> {
        let courses = course::Query::load_all(store);
        if course::Query::find_by_id(&courses, course_id).is_none() {
            return Err(EnrollmentError::CourseNotFound(course_id));
        }

        let mut enrollments = Query::enrollments(store, &student.id);
        if !enrollments.contains(&course_id) {
            enrollments.push(course_id);
            Self::save_enrollments(store, student, &enrollments)?;
            tracing::debug!(user = %student.id, course = %course_id, "enrolled");
        }
        Ok(enrollments)
    }

    /// Leaves one course; unknown course ids in the stored list are
    /// dropped silently along the way.
    pub fn withdraw<S: KeyValueStore + ?Sized>(
        store: &S,
        student: &StudentRef,
        course_id: DocumentId,
    ) -> Result<Vec<DocumentId>, EnrollmentError> {
        let mut enrollments = Query::enrollments(store, &student.id);
        enrollments.retain(|id| *id != course_id);
        Self::save_enrollments(store, student, &enrollments)?;
        Ok(enrollments)
    }
}
