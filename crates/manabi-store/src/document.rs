//! Shared read/write helpers for JSON documents in the key-value store.

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde::Serialize;

use manabi_model::id::DocumentId;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// Reads a document, treating both an absent key and a document that fails
/// to parse as the empty value. The parse failure is logged but not
/// surfaced; callers see "no data".
pub(crate) fn read_or_default<S, T>(store: &S, key: &str) -> T
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned + Default,
{
    let Some(raw) = store.get(key) else {
        return T::default();
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(key, %error, "malformed document treated as empty");
            T::default()
        }
    }
}

pub(crate) fn write_json<S, T>(store: &S, key: &str, value: &T) -> Result<(), StoreError>
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// Picks a fresh id for a document joining a collection: the current
/// millisecond token, bumped past any id already taken. Two documents
/// created in the same millisecond stay distinct.
pub(crate) fn next_document_id(taken: impl IntoIterator<Item = DocumentId>) -> DocumentId {
    let taken: HashSet<DocumentId> = taken.into_iter().collect();
    let mut candidate = DocumentId::now();
    while taken.contains(&candidate) {
        candidate = candidate.successor();
    }
    candidate
}
