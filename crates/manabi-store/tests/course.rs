use manabi_model::course::CourseUpdate;
use manabi_model::id::DocumentId;
use manabi_model::validate::ValidationError;
use manabi_store::course::{CourseError, Mutation, Query};
use manabi_store::{keys, KeyValueStore, MemoryStore};
use test_log::test;

mod common;

#[test]
fn added_courses_get_distinct_ids() {
    let store = MemoryStore::new();
    let owner = common::instructor();

    let first = Mutation::add_course(&store, common::new_course("Rust"), &owner).unwrap();
    let second = Mutation::add_course(&store, common::new_course("Tokio"), &owner).unwrap();
    let third = Mutation::add_course(&store, common::new_course("Serde"), &owner).unwrap();

    let courses = Query::load_all(&store);
    assert_eq!(courses.len(), 3);
    assert_ne!(first.id, second.id);
    assert_ne!(second.id, third.id);
    assert_ne!(first.id, third.id);
    assert_eq!(courses[0].instructor_email.as_deref(), Some("aiko@example.com"));
}

#[test]
fn delete_removes_exactly_one_course() {
    let store = MemoryStore::new();
    let owner = common::instructor();

    let keep = Mutation::add_course(&store, common::new_course("Rust"), &owner).unwrap();
    let gone = Mutation::add_course(&store, common::new_course("Tokio"), &owner).unwrap();

    Mutation::delete_course(&store, gone.id).unwrap();

    let courses = Query::load_all(&store);
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].id, keep.id);
    assert_eq!(courses[0].title, "Rust");

    let err = Mutation::delete_course(&store, gone.id).unwrap_err();
    assert!(matches!(err, CourseError::CourseNotFound(id) if id == gone.id));
}

#[test]
fn load_then_resave_is_byte_identical() {
    let store = MemoryStore::new();
    let owner = common::instructor();

    let course = Mutation::add_course(&store, common::new_course("Rust"), &owner).unwrap();
    Mutation::add_content(&store, course.id, common::new_content("intro")).unwrap();
    Mutation::add_quiz(&store, course.id, common::new_quiz(vec![common::question(1, 10)])).unwrap();

    let before = store.get(keys::COURSES).unwrap();
    Mutation::save_all(&store, &Query::load_all(&store)).unwrap();
    let after = store.get(keys::COURSES).unwrap();

    assert_eq!(before, after);
}

#[test]
fn corrupted_catalog_reads_as_empty() {
    let store = MemoryStore::new();
    store.set(keys::COURSES, "{definitely not json").unwrap();
    assert!(Query::load_all(&store).is_empty());
}

#[test]
fn route_parameter_lookup_parses_before_comparing() {
    let store = MemoryStore::new();
    let owner = common::instructor();
    let course = Mutation::add_course(&store, common::new_course("Rust"), &owner).unwrap();

    let courses = Query::load_all(&store);
    let found = Query::find_by_route(&courses, &course.id.to_string()).unwrap();
    assert_eq!(found.id, course.id);

    let err = Query::find_by_route(&courses, "not-a-number").unwrap_err();
    assert!(matches!(err, CourseError::Id(_)));

    let err = Query::find_by_route(&courses, "1").unwrap_err();
    assert!(matches!(err, CourseError::CourseNotFound(id) if id == DocumentId::from_millis(1)));
}

#[test]
fn rejected_form_leaves_catalog_untouched() {
    let store = MemoryStore::new();
    let owner = common::instructor();
    let course = Mutation::add_course(&store, common::new_course("Rust"), &owner).unwrap();
    let before = store.get(keys::COURSES).unwrap();

    let update = CourseUpdate {
        title: String::new(),
        description: "still here".to_owned(),
        video_url: None,
    };
    let err = Mutation::update_course(&store, course.id, update).unwrap_err();
    assert!(matches!(err, CourseError::Validation(ValidationError::EmptyTitle)));
    assert_eq!(store.get(keys::COURSES).unwrap(), before);
}

#[test]
fn embedded_documents_join_their_parent() {
    let store = MemoryStore::new();
    let owner = common::instructor();
    let course = Mutation::add_course(&store, common::new_course("Rust"), &owner).unwrap();

    let content = Mutation::add_content(&store, course.id, common::new_content("intro")).unwrap();
    let quiz = Mutation::add_quiz(
        &store,
        course.id,
        common::new_quiz(vec![common::question(1, 10), common::question(0, 5)]),
    )
    .unwrap();
    assert_eq!(quiz.total_marks, 15);

    let courses = Query::load_all(&store);
    let reloaded = Query::find_by_id(&courses, course.id).unwrap();
    assert_eq!(reloaded.find_content(content.id).unwrap().title, "intro");
    assert_eq!(reloaded.find_quiz(quiz.id).unwrap().total_marks, 15);

    Mutation::delete_content(&store, course.id, content.id).unwrap();
    let courses = Query::load_all(&store);
    assert!(Query::find_by_id(&courses, course.id).unwrap().contents.is_empty());

    let missing = DocumentId::from_millis(1);
    let err = Mutation::add_content(&store, missing, common::new_content("lost")).unwrap_err();
    assert!(matches!(err, CourseError::CourseNotFound(id) if id == missing));
}

#[test]
fn instructor_sees_only_their_own_courses() {
    let store = MemoryStore::new();
    let owner = common::instructor();
    let mut other = common::instructor();
    other.email = "sora@example.com".to_owned();

    Mutation::add_course(&store, common::new_course("Rust"), &owner).unwrap();
    Mutation::add_course(&store, common::new_course("Tokio"), &other).unwrap();

    let courses = Query::load_all(&store);
    let owned = Query::find_by_instructor(&courses, "aiko@example.com");
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].title, "Rust");
}

#[test]
fn init_defaults_only_seeds_an_absent_catalog() {
    let store = MemoryStore::new();
    let owner = common::instructor();

    let seeded = Mutation::add_course(&MemoryStore::new(), common::new_course("Seed"), &owner).unwrap();
    Mutation::init_defaults(&store, std::slice::from_ref(&seeded)).unwrap();
    assert_eq!(Query::load_all(&store).len(), 1);

    // A second init must not clobber what is already there.
    Mutation::init_defaults(&store, &[]).unwrap();
    assert_eq!(Query::load_all(&store).len(), 1);
}
