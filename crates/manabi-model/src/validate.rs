use thiserror::Error;

/// Number of answer options every multiple-choice question carries.
pub const QUESTION_OPTIONS: usize = 4;

/// Form-level validation failures. Raised before any mutation happens; a
/// rejected form leaves the store untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("description must not be empty")]
    EmptyDescription,

    #[error("this content type needs a url")]
    MissingUrl,

    #[error("a quiz needs at least one question")]
    NoQuestions,

    #[error("question {0} must have exactly {QUESTION_OPTIONS} options")]
    WrongOptionCount(usize),

    #[error("question {0} has an empty option")]
    EmptyOption(usize),

    #[error("question {0} marks a correct option that does not exist")]
    CorrectAnswerOutOfRange(usize),
}
