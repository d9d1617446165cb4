use chrono::Utc;

use manabi_model::course::{Content, Course, CourseUpdate, NewContent, NewCourse};
use manabi_model::id::DocumentId;
use manabi_model::quiz::{NewQuiz, Quiz};
use manabi_model::user::SessionUser;

use crate::course::error::CourseError;
use crate::course::query::Query;
use crate::document::{next_document_id, write_json};
use crate::error::StoreError;
use crate::keys;
use crate::kv::KeyValueStore;

pub struct Mutation;

impl Mutation {
    /// Rewrites the whole catalog. Concurrent writers race here with
    /// last-writer-wins over the entire collection, not per record.
    pub fn save_all<S: KeyValueStore + ?Sized>(store: &S, courses: &[Course]) -> Result<(), StoreError> {
        write_json(store, keys::COURSES, &courses)
    }

    /// Seeds the catalog on first run. A present `courses` key, even an
    /// empty one, is left alone.
    pub fn init_defaults<S: KeyValueStore + ?Sized>(store: &S, defaults: &[Course]) -> Result<(), StoreError> {
        if store.get(keys::COURSES).is_none() {
            tracing::debug!(count = defaults.len(), "seeding default catalog");
            Self::save_all(store, defaults)?;
        }
        Ok(())
    }

    pub fn add_course<S: KeyValueStore + ?Sized>(
        store: &S,
        form: NewCourse,
        owner: &SessionUser,
    ) -> Result<Course, CourseError> {
        form.validate()?;
        let mut courses = Query::load_all(store);
        let id = next_document_id(courses.iter().map(|course| course.id));
        let course = Course {
            id,
            title: form.title,
            description: form.description,
            video_url: form.video_url,
            instructor_name: Some(owner.name.clone()),
            instructor_email: Some(owner.email.clone()),
            contents: Vec::new(),
            quizzes: Vec::new(),
            enrolled_students: Vec::new(),
            progress: None,
            created_at: Utc::now(),
        };
        courses.push(course.clone());
        Self::save_all(store, &courses)?;
        tracing::debug!(course = %id, "created course");
        Ok(course)
    }

    pub fn update_course<S: KeyValueStore + ?Sized>(
        store: &S,
        id: DocumentId,
        update: CourseUpdate,
    ) -> Result<Course, CourseError> {
        update.validate()?;
        let mut courses = Query::load_all(store);
        let course = courses
            .iter_mut()
            .find(|course| course.id == id)
            .ok_or(CourseError::CourseNotFound(id))?;
        course.title = update.title;
        course.description = update.description;
        course.video_url = update.video_url;
        let updated = course.clone();
        Self::save_all(store, &courses)?;
        Ok(updated)
    }

    /// Removes exactly one course; the rest of the catalog is rewritten
    /// untouched.
    pub fn delete_course<S: KeyValueStore + ?Sized>(store: &S, id: DocumentId) -> Result<(), CourseError> {
        let mut courses = Query::load_all(store);
        let before = courses.len();
        courses.retain(|course| course.id != id);
        if courses.len() == before {
            return Err(CourseError::CourseNotFound(id));
        }
        Self::save_all(store, &courses)?;
        tracing::debug!(course = %id, "deleted course");
        Ok(())
    }

    pub fn add_content<S: KeyValueStore + ?Sized>(
        store: &S,
        course_id: DocumentId,
        form: NewContent,
    ) -> Result<Content, CourseError> {
        form.validate()?;
        let mut courses = Query::load_all(store);
        let course = courses
            .iter_mut()
            .find(|course| course.id == course_id)
            .ok_or(CourseError::CourseNotFound(course_id))?;
        // Content ids are unique only within their parent course.
        let id = next_document_id(course.contents.iter().map(|content| content.id));
        let content = Content {
            id,
            r#type: form.r#type,
            title: form.title,
            description: form.description,
            url: form.url,
            created_at: Utc::now(),
        };
        course.contents.push(content.clone());
        Self::save_all(store, &courses)?;
        Ok(content)
    }

    pub fn delete_content<S: KeyValueStore + ?Sized>(
        store: &S,
        course_id: DocumentId,
        content_id: DocumentId,
    ) -> Result<(), CourseError> {
        let mut courses = Query::load_all(store);
        let course = courses
            .iter_mut()
            .find(|course| course.id == course_id)
            .ok_or(CourseError::CourseNotFound(course_id))?;
        let before = course.contents.len();
        course.contents.retain(|content| content.id != content_id);
        if course.contents.len() == before {
            return Err(CourseError::ContentNotFound(content_id));
        }
        Self::save_all(store, &courses)?;
        Ok(())
    }

    pub fn add_quiz<S: KeyValueStore + ?Sized>(
        store: &S,
        course_id: DocumentId,
        form: NewQuiz,
    ) -> Result<Quiz, CourseError> {
        form.validate()?;
        let total_marks = form.total_marks();
        let mut courses = Query::load_all(store);
        let course = courses
            .iter_mut()
            .find(|course| course.id == course_id)
            .ok_or(CourseError::CourseNotFound(course_id))?;
        let id = next_document_id(course.quizzes.iter().map(|quiz| quiz.id));
        let quiz = Quiz {
            id,
            title: form.title,
            description: form.description,
            questions: form.questions,
            total_marks,
            passing_score: form.passing_score,
            created_at: Utc::now(),
        };
        course.quizzes.push(quiz.clone());
        Self::save_all(store, &courses)?;
        tracing::debug!(course = %course_id, quiz = %id, "added quiz");
        Ok(quiz)
    }
}
