//! Per-user notification queues, all under the single shared
//! `notifications` document: a map of user id to a most-recent-first list.
//! Nothing caps or expires a queue.

pub mod error;
pub mod mutation;
pub mod query;

pub use error::NotificationError;
pub use mutation::Mutation;
pub use query::Query;

use indexmap::IndexMap;
use manabi_model::id::UserId;
use manabi_model::notification::Notification;

pub(crate) type NotificationLog = IndexMap<UserId, Vec<Notification>>;
