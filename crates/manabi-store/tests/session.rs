use manabi_model::id::UserId;
use manabi_store::session::{Mutation, Query};
use manabi_store::{keys, KeyValueStore, MemoryStore};
use test_log::test;

mod common;

#[test]
fn session_round_trip() {
    let store = MemoryStore::new();
    assert!(Query::current_user(&store).is_none());

    let user = common::instructor();
    Mutation::set_current_user(&store, &user).unwrap();
    assert_eq!(Query::current_user(&store), Some(user.clone()));
    assert_eq!(Query::auth_token(&store).as_deref(), Some("token-instructor"));

    Mutation::clear_current_user(&store).unwrap();
    assert!(Query::current_user(&store).is_none());
    assert!(Query::auth_token(&store).is_none());
}

#[test]
fn malformed_session_reads_as_signed_out() {
    let store = MemoryStore::new();
    store.set(keys::USER, "{broken").unwrap();
    assert!(Query::current_user(&store).is_none());
}

#[test]
fn init_user_defaults_seeds_only_missing_documents() {
    let store = MemoryStore::new();
    let user = UserId::new("u-1");

    store.set(&keys::enrollments(&user), "[1715700000000]").unwrap();
    Mutation::init_user_defaults(&store, &user).unwrap();

    assert_eq!(store.get(&keys::enrollments(&user)).as_deref(), Some("[1715700000000]"));
    assert_eq!(store.get(&keys::user_progress(&user)).as_deref(), Some("{}"));
    assert_eq!(store.get(&keys::quiz_results(&user)).as_deref(), Some("{}"));
}

#[test]
fn cleanup_removes_every_per_user_document() {
    let store = MemoryStore::new();
    let user = UserId::new("u-1");

    Mutation::init_user_defaults(&store, &user).unwrap();
    store.set(&keys::quiz_attempts(&user), "[]").unwrap();

    Mutation::cleanup_user_data(&store, &user).unwrap();

    assert_eq!(store.get(&keys::enrollments(&user)), None);
    assert_eq!(store.get(&keys::user_progress(&user)), None);
    assert_eq!(store.get(&keys::quiz_results(&user)), None);
    assert_eq!(store.get(&keys::quiz_attempts(&user)), None);
}
