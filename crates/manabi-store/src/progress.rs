//! Completion tracking. The dedicated `content_<id>_completed` key is the
//! single source of truth; the per-course map and the `progress` field
//! embedded in a course are views derived from it after every change.

pub mod error;
pub mod mutation;
pub mod query;

pub use error::ProgressError;
pub use mutation::Mutation;
pub use query::Query;
