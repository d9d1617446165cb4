//! The course repository: the `courses` key holds the whole catalog as one
//! JSON array, and every operation here is a load, a linear scan, and a
//! full rewrite.

pub mod error;
pub mod mutation;
pub mod query;

pub use error::CourseError;
pub use mutation::Mutation;
pub use query::Query;
