use thiserror::Error;

/// Failure writing to the key-value substrate. Reads never error: an absent
/// or malformed document is treated as empty by the repositories.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to persist store file")]
    Io(#[from] std::io::Error),

    #[error("failed to encode document")]
    Encode(#[from] serde_json::Error),
}
