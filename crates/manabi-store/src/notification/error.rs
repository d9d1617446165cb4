use thiserror::Error;

use manabi_model::id::DocumentId;

use crate::error::StoreError;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("notification {0} not found")]
    NotFound(DocumentId),
}
