use thiserror::Error;

use manabi_model::id::DocumentId;

use crate::error::StoreError;

#[derive(Debug, Error)]
pub enum EnrollmentError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("course {0} not found")]
    CourseNotFound(DocumentId),
}
