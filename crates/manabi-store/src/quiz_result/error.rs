use thiserror::Error;

use crate::error::StoreError;

#[derive(Debug, Error)]
pub enum SubmissionError {
    /// A submission is all-or-nothing: one unanswered question rejects the
    /// whole sheet before anything is stored.
    #[error("question {0} has no answer")]
    Unanswered(usize),

    #[error(transparent)]
    Store(#[from] StoreError),
}
