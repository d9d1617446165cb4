use thiserror::Error;

use manabi_model::id::{DocumentId, IdError};
use manabi_model::validate::ValidationError;

use crate::error::StoreError;

#[derive(Debug, Error)]
pub enum CourseError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("course {0} not found")]
    CourseNotFound(DocumentId),

    #[error("content {0} not found")]
    ContentNotFound(DocumentId),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Id(#[from] IdError),
}
