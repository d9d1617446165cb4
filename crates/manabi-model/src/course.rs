use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::id::{DocumentId, UserId};
use crate::quiz::Quiz;
use crate::validate::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Video,
    Link,
    File,
}

/// A single learning asset embedded in a course. Has no lifecycle of its
/// own — it is created, found, and deleted through its parent course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub id: DocumentId,
    pub r#type: ContentType,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRef {
    pub id: UserId,
    pub name: String,
}

/// Top-level learning unit. The whole catalog is stored as one JSON array
/// under the `courses` key; every mutation rewrites the full document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: DocumentId,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor_email: Option<String>,
    #[serde(default)]
    pub contents: Vec<Content>,
    #[serde(default)]
    pub quizzes: Vec<Quiz>,
    #[serde(default)]
    pub enrolled_students: Vec<StudentRef>,
    /// Derived completion view, recomputed from the per-content flags
    /// whenever progress changes. Never the source of truth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<IndexMap<DocumentId, bool>>,
    pub created_at: DateTime<Utc>,
}

impl Course {
    #[must_use]
    pub fn find_content(&self, id: DocumentId) -> Option<&Content> {
        self.contents.iter().find(|content| content.id == id)
    }

    #[must_use]
    pub fn find_quiz(&self, id: DocumentId) -> Option<&Quiz> {
        self.quizzes.iter().find(|quiz| quiz.id == id)
    }
}

/// Course creation form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl NewCourse {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        Ok(())
    }
}

/// Course edit form; only the editable fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseUpdate {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl CourseUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        Ok(())
    }
}

/// Content creation form. File upload mechanics live outside this core;
/// a file item arrives here with the url it was uploaded to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContent {
    pub r#type: ContentType,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl NewContent {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let needs_url = matches!(self.r#type, ContentType::Video | ContentType::Link);
        let blank_url = self.url.as_deref().map_or(true, |url| url.trim().is_empty());
        if needs_url && blank_url {
            return Err(ValidationError::MissingUrl);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_content(r#type: ContentType, url: Option<&str>) -> NewContent {
        NewContent {
            r#type,
            title: "Intro".to_owned(),
            description: String::new(),
            url: url.map(str::to_owned),
        }
    }

    #[test]
    fn course_round_trips_with_wire_field_names() {
        let json = r#"{
            "id": 1715700000000,
            "title": "Rust basics",
            "description": "From zero",
            "videoUrl": "https://example.com/intro.mp4",
            "contents": [],
            "quizzes": [],
            "enrolledStudents": [{"id": "u-1", "name": "Mina"}],
            "createdAt": "2024-05-14T16:00:00Z"
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.id, DocumentId::from_millis(1_715_700_000_000));
        assert_eq!(course.enrolled_students[0].id, UserId::new("u-1"));

        let out = serde_json::to_value(&course).unwrap();
        assert_eq!(out["videoUrl"], "https://example.com/intro.mp4");
        assert_eq!(out["enrolledStudents"][0]["name"], "Mina");
    }

    #[test]
    fn link_content_requires_url() {
        assert_eq!(
            new_content(ContentType::Link, None).validate(),
            Err(ValidationError::MissingUrl)
        );
        assert_eq!(
            new_content(ContentType::Link, Some("  ")).validate(),
            Err(ValidationError::MissingUrl)
        );
        assert!(new_content(ContentType::Link, Some("https://docs.rs")).validate().is_ok());
        assert!(new_content(ContentType::File, None).validate().is_ok());
    }

    #[test]
    fn blank_title_is_rejected() {
        let form = NewCourse {
            title: " ".to_owned(),
            description: "d".to_owned(),
            video_url: None,
        };
        assert_eq!(form.validate(), Err(ValidationError::EmptyTitle));
    }
}
