use manabi_model::id::{DocumentId, UserId};
use manabi_model::quiz::Quiz;
use manabi_model::result::{QuizAttempt, QuizResult};

use crate::document::write_json;
use crate::keys;
use crate::kv::KeyValueStore;
use crate::quiz_result::error::SubmissionError;
use crate::quiz_result::query::Query;
use crate::quiz_result::scoring::score_submission;

pub struct Mutation;

impl Mutation {
    /// Stores a scored result: appended to the attempt history, upserted
    /// as the latest for its quiz. Independent writes; a failure between
    /// them leaves the history one entry ahead of the latest map.
    pub fn record_attempt<S: KeyValueStore + ?Sized>(
        store: &S,
        user_id: &UserId,
        result: QuizResult,
    ) -> Result<QuizAttempt, SubmissionError> {
        let attempt = QuizAttempt::from_result(user_id.clone(), &result);

        let mut attempts = Query::attempts(store, user_id);
        attempts.push(attempt.clone());
        write_json(store, &keys::quiz_attempts(user_id), &attempts)?;

        let mut results = Query::results(store, user_id);
        results.insert(result.quiz_id, result);
        write_json(store, &keys::quiz_results(user_id), &results)?;

        tracing::debug!(user = %user_id, quiz = %attempt.quiz_id, score = attempt.score, "recorded attempt");
        Ok(attempt)
    }

    /// The quiz-attempt flow: score the sheet, then store it. A rejected
    /// sheet returns the validation error with the store untouched.
    pub fn submit<S: KeyValueStore + ?Sized>(
        store: &S,
        user_id: &UserId,
        course_id: DocumentId,
        quiz: &Quiz,
        answers: &[Option<usize>],
    ) -> Result<QuizAttempt, SubmissionError> {
        let result = score_submission(course_id, quiz, answers)?;
        Self::record_attempt(store, user_id, result)
    }
}
