use manabi_model::id::{DocumentId, UserId};
use manabi_model::notification::{NewNotification, NotificationKind};
use manabi_store::notification::{Mutation, NotificationError, Query};
use manabi_store::MemoryStore;
use test_log::test;

fn new_notification(message: &str) -> NewNotification {
    NewNotification {
        r#type: NotificationKind::NewContent,
        course_id: DocumentId::from_millis(1),
        message: message.to_owned(),
    }
}

#[test]
fn push_prepends_unread_with_fresh_id() {
    let store = MemoryStore::new();
    let user = UserId::new("u-1");

    let first = Mutation::push(&store, &user, new_notification("first")).unwrap();
    let second = Mutation::push(&store, &user, new_notification("second")).unwrap();
    assert_ne!(first.id, second.id);

    let queue = Query::list(&store, &user);
    assert_eq!(queue.len(), 2);
    assert_eq!(queue[0].message, "second");
    assert_eq!(queue[1].message, "first");
    assert!(queue.iter().all(|notification| !notification.is_read));
    assert_eq!(Query::unread_count(&store, &user), 2);
}

#[test]
fn mark_read_flips_one_entry() {
    let store = MemoryStore::new();
    let user = UserId::new("u-1");

    let first = Mutation::push(&store, &user, new_notification("first")).unwrap();
    Mutation::push(&store, &user, new_notification("second")).unwrap();

    Mutation::mark_read(&store, &user, first.id).unwrap();

    let queue = Query::list(&store, &user);
    assert!(queue.iter().find(|n| n.id == first.id).unwrap().is_read);
    assert_eq!(Query::unread_count(&store, &user), 1);
}

#[test]
fn mark_read_on_missing_notification_fails() {
    let store = MemoryStore::new();
    let user = UserId::new("u-1");
    let ghost = DocumentId::from_millis(404);

    let err = Mutation::mark_read(&store, &user, ghost).unwrap_err();
    assert!(matches!(err, NotificationError::NotFound(id) if id == ghost));
}

#[test]
fn queues_are_per_user() {
    let store = MemoryStore::new();
    let alice = UserId::new("u-alice");
    let bob = UserId::new("u-bob");

    Mutation::push(&store, &alice, new_notification("for alice")).unwrap();

    assert_eq!(Query::list(&store, &alice).len(), 1);
    assert!(Query::list(&store, &bob).is_empty());
}

#[test]
fn nothing_truncates_a_long_queue() {
    let store = MemoryStore::new();
    let user = UserId::new("u-1");

    for n in 0..100 {
        Mutation::push(&store, &user, new_notification(&format!("event {n}"))).unwrap();
    }

    let queue = Query::list(&store, &user);
    assert_eq!(queue.len(), 100);
    assert_eq!(queue[0].message, "event 99");
    assert_eq!(queue[99].message, "event 0");
}
