use indexmap::IndexMap;

use manabi_model::id::{DocumentId, UserId};
use manabi_model::result::{QuizAttempt, QuizResult};

use crate::document::read_or_default;
use crate::keys;
use crate::kv::KeyValueStore;

pub struct Query;

impl Query {
    /// The latest result per quiz for one user.
    #[must_use]
    pub fn results<S: KeyValueStore + ?Sized>(store: &S, user_id: &UserId) -> IndexMap<DocumentId, QuizResult> {
        read_or_default(store, &keys::quiz_results(user_id))
    }

    #[must_use]
    pub fn latest_result<S: KeyValueStore + ?Sized>(
        store: &S,
        user_id: &UserId,
        quiz_id: DocumentId,
    ) -> Option<QuizResult> {
        Self::results(store, user_id).shift_remove(&quiz_id)
    }

    /// Full submission history, oldest first.
    #[must_use]
    pub fn attempts<S: KeyValueStore + ?Sized>(store: &S, user_id: &UserId) -> Vec<QuizAttempt> {
        read_or_default(store, &keys::quiz_attempts(user_id))
    }

    #[must_use]
    pub fn attempts_for_quiz<S: KeyValueStore + ?Sized>(
        store: &S,
        user_id: &UserId,
        quiz_id: DocumentId,
    ) -> Vec<QuizAttempt> {
        Self::attempts(store, user_id)
            .into_iter()
            .filter(|attempt| attempt.quiz_id == quiz_id)
            .collect()
    }

    /// Best percentage across everything cached locally for one quiz: the
    /// attempt history plus the latest-result map. `None` when the user
    /// never took the quiz.
    #[must_use]
    pub fn best_score<S: KeyValueStore + ?Sized>(store: &S, user_id: &UserId, quiz_id: DocumentId) -> Option<f64> {
        let mut best: Option<f64> = None;
        let history = Self::attempts_for_quiz(store, user_id, quiz_id)
            .into_iter()
            .map(|attempt| attempt.percentage);
        let latest = Self::latest_result(store, user_id, quiz_id)
            .into_iter()
            .map(|result| result.percentage);
        for percentage in history.chain(latest) {
            best = Some(best.map_or(percentage, |current| current.max(percentage)));
        }
        best
    }
}
