use thiserror::Error;

use crate::error::StoreError;

#[derive(Debug, Error)]
pub enum ProgressError {
    #[error(transparent)]
    Store(#[from] StoreError),
}
