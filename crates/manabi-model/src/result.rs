use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::id::{DocumentId, UserId};

/// The latest stored outcome for one quiz, kept per user in the
/// `quiz_results_<userId>` map keyed by quiz id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub course_id: DocumentId,
    pub quiz_id: DocumentId,
    pub score: u32,
    pub total_marks: u32,
    pub percentage: f64,
    /// Question index to selected option index.
    pub answers: IndexMap<usize, usize>,
    pub completed_at: DateTime<Utc>,
}

/// One entry of the append-only attempt history under
/// `quiz_attempts_<userId>`. The history keeps every submission; the result
/// map only the latest per quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttempt {
    pub user_id: UserId,
    pub course_id: DocumentId,
    pub quiz_id: DocumentId,
    pub score: u32,
    pub total_marks: u32,
    pub percentage: f64,
    pub answers: IndexMap<usize, usize>,
    pub attempted_at: DateTime<Utc>,
}

impl QuizAttempt {
    /// Stamps a scored result into a history entry for `user_id`.
    #[must_use]
    pub fn from_result(user_id: UserId, result: &QuizResult) -> Self {
        Self {
            user_id,
            course_id: result.course_id,
            quiz_id: result.quiz_id,
            score: result.score,
            total_marks: result.total_marks,
            percentage: result.percentage,
            answers: result.answers.clone(),
            attempted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_sheet_keys_serialize_as_strings() {
        let result = QuizResult {
            course_id: DocumentId::from_millis(1),
            quiz_id: DocumentId::from_millis(2),
            score: 15,
            total_marks: 15,
            percentage: 100.0,
            answers: IndexMap::from([(0, 1), (1, 0)]),
            completed_at: "2024-05-14T16:00:00Z".parse().unwrap(),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["answers"]["0"], 1);
        assert_eq!(value["answers"]["1"], 0);
        assert_eq!(value["totalMarks"], 15);
    }
}
