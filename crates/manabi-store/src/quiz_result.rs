//! Quiz scoring and per-user result storage. Every submission lands twice:
//! appended to the `quiz_attempts_<userId>` history and upserted as the
//! latest entry in the `quiz_results_<userId>` map. Two writes, no
//! rollback between them.

pub mod error;
pub mod mutation;
pub mod query;
pub mod scoring;

pub use error::SubmissionError;
pub use mutation::Mutation;
pub use query::Query;
pub use scoring::score_submission;
