//! The local document layer: a string-keyed key-value substrate and the
//! repositories that keep course, progress, quiz, enrollment, and
//! notification state in it as JSON documents.
//!
//! Every mutation is an optimistic read-modify-write of a whole document.
//! There is no locking across writers; two concurrent read-modify-write
//! cycles race with last-writer-wins at document granularity. That window
//! is part of the contract, not a bug to fix here.

pub mod course;
pub mod enrollment;
pub mod error;
pub mod keys;
pub mod kv;
pub mod notification;
pub mod progress;
pub mod quiz_result;
pub mod session;

mod document;

pub use error::StoreError;
pub use kv::{KeyValueStore, MemoryStore};
