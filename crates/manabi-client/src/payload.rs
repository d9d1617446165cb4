//! Request and response bodies of the platform API, in its wire spelling.
//! The domain documents themselves come from `manabi-model`.

use serde::{Deserialize, Serialize};

use manabi_model::id::{DocumentId, UserId};
use manabi_model::user::Role;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentRequest {
    pub user_id: UserId,
    pub course_id: DocumentId,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    pub course_id: DocumentId,
    pub content_id: DocumentId,
}

/// One answer of a remote quiz submission. The remote API addresses
/// questions by their own ids and options by letter.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedAnswer {
    pub question_id: DocumentId,
    pub selected_option: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSubmission {
    pub user_id: UserId,
    pub quiz_id: DocumentId,
    pub course_id: DocumentId,
    pub answers: Vec<SubmittedAnswer>,
}

/// What the server reports back for a scored submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOutcome {
    pub score: u32,
    pub total_marks: u32,
    pub percentage: f64,
    pub total_questions: u32,
    #[serde(default)]
    pub message: String,
}
