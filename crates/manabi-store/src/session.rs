//! The session document under the `user` key, plus lifecycle of the
//! per-user documents that hang off a signed-in account.

use manabi_model::id::UserId;
use manabi_model::user::SessionUser;

use crate::document::write_json;
use crate::error::StoreError;
use crate::keys;
use crate::kv::KeyValueStore;

pub struct Query;

impl Query {
    /// The signed-in user, or `None` when signed out — which includes a
    /// session document that no longer parses.
    #[must_use]
    pub fn current_user<S: KeyValueStore + ?Sized>(store: &S) -> Option<SessionUser> {
        let raw = store.get(keys::USER)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(error) => {
                tracing::warn!(%error, "session document unreadable, treating as signed out");
                None
            }
        }
    }

    /// The bearer token of the signed-in user, for the remote API.
    #[must_use]
    pub fn auth_token<S: KeyValueStore + ?Sized>(store: &S) -> Option<String> {
        Self::current_user(store).map(|user| user.token)
    }
}

pub struct Mutation;

impl Mutation {
    pub fn set_current_user<S: KeyValueStore + ?Sized>(store: &S, user: &SessionUser) -> Result<(), StoreError> {
        write_json(store, keys::USER, user)
    }

    pub fn clear_current_user<S: KeyValueStore + ?Sized>(store: &S) -> Result<(), StoreError> {
        store.remove(keys::USER)
    }

    /// Seeds the empty per-user documents a fresh account expects, leaving
    /// any that already exist alone.
    pub fn init_user_defaults<S: KeyValueStore + ?Sized>(store: &S, user_id: &UserId) -> Result<(), StoreError> {
        let defaults = [
            (keys::enrollments(user_id), "[]"),
            (keys::user_progress(user_id), "{}"),
            (keys::quiz_results(user_id), "{}"),
        ];
        for (key, empty) in defaults {
            if store.get(&key).is_none() {
                store.set(&key, empty)?;
            }
        }
        Ok(())
    }

    /// Removes everything keyed to one user. Independent removes; there is
    /// no rollback if one fails partway.
    pub fn cleanup_user_data<S: KeyValueStore + ?Sized>(store: &S, user_id: &UserId) -> Result<(), StoreError> {
        store.remove(&keys::enrollments(user_id))?;
        store.remove(&keys::user_progress(user_id))?;
        store.remove(&keys::quiz_results(user_id))?;
        store.remove(&keys::quiz_attempts(user_id))?;
        Ok(())
    }
}
