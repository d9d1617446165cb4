use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::DocumentId;
use crate::validate::{ValidationError, QUESTION_OPTIONS};

/// A multiple-choice question. `correct_answer` is the index of the right
/// option; awarded marks are all-or-nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub marks: u32,
}

impl Question {
    #[must_use]
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_answer
    }
}

/// An assessment embedded in a course's `quizzes` list. `total_marks` is
/// fixed at creation as the sum over all questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: DocumentId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub questions: Vec<Question>,
    pub total_marks: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passing_score: Option<u32>,
    pub created_at: DateTime<Utc>,
}

/// Quiz authoring form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuiz {
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passing_score: Option<u32>,
}

impl NewQuiz {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.questions.is_empty() {
            return Err(ValidationError::NoQuestions);
        }
        for (index, question) in self.questions.iter().enumerate() {
            if question.options.len() != QUESTION_OPTIONS {
                return Err(ValidationError::WrongOptionCount(index));
            }
            if question.options.iter().any(|option| option.trim().is_empty()) {
                return Err(ValidationError::EmptyOption(index));
            }
            if question.correct_answer >= question.options.len() {
                return Err(ValidationError::CorrectAnswerOutOfRange(index));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn total_marks(&self) -> u32 {
        self.questions.iter().map(|question| question.marks).sum()
    }
}
