//! Tests for editor sessions and item-list editing

use std::time::Duration;

use institute_core::content::{ContentSource, MemoryRemoteStore, SaveOutcome, Section};
use institute_core::editor::{Direction, EditorError, EditorSession, ItemId, Mount};
use institute_core::sections::{CoursesContent, FaqContent};
use institute_core::ValidationError;
use serde_json::{json, Value};

use super::support::Fixture;

fn ids(items: &[Value]) -> Vec<u64> {
    items.iter().map(|item| item["id"].as_u64().unwrap()).collect()
}

#[tokio::test]
async fn test_faq_edit_scenario() {
    let fixture = Fixture::new();
    let mut session = EditorSession::open(&fixture.manager, Section::Faq).await;
    assert_eq!(session.items(None).unwrap().len(), 5);

    let mut item = session.items(None).unwrap()[2].clone();
    assert_eq!(item["id"], 3);
    item["answer"] = json!("Yes, recognized in over 30 countries.");
    session.update_item(None, &ItemId::Num(3), item).unwrap();

    let outcome = session.save().await.unwrap();
    assert_eq!(outcome, SaveOutcome::Saved);

    let before = Section::Faq.default_document();
    let after = fixture.manager.resolver().resolve(Section::Faq).await;
    let faqs = after["faqs"].as_array().unwrap();
    assert_eq!(faqs.len(), 5);
    assert_eq!(ids(faqs), vec![1, 2, 3, 4, 5]);
    assert_eq!(faqs[2]["answer"], "Yes, recognized in over 30 countries.");
    assert_eq!(faqs[2]["question"], before["faqs"][2]["question"]);
    for index in [0, 1, 3, 4] {
        assert_eq!(faqs[index], before["faqs"][index]);
    }
    assert_eq!(after["title"], before["title"]);
}

#[tokio::test]
async fn test_add_assigns_max_plus_one() {
    let remote = MemoryRemoteStore::new().with_document(
        "whyus",
        json!({"features": [{"id": 1, "title": "A"}, {"id": 3, "title": "B"}]}),
    );
    let fixture = Fixture::with_remote(remote);
    let mut session = EditorSession::open(&fixture.manager, Section::WhyUs).await;

    let id = session
        .add_item(None, json!({"icon": "Star", "title": "C"}))
        .unwrap();

    assert_eq!(id, ItemId::Num(4));
    assert_eq!(ids(session.items(None).unwrap()), vec![1, 3, 4]);
    assert!(session.is_dirty());
}

#[tokio::test]
async fn test_add_to_empty_list_starts_at_one() {
    let remote = MemoryRemoteStore::new().with_document("courses", json!({"courses": []}));
    let fixture = Fixture::with_remote(remote);
    let mut session = EditorSession::open(&fixture.manager, Section::Courses).await;

    assert_eq!(
        session.add_item(None, json!({"title": "New"})).unwrap(),
        ItemId::Num(1)
    );
}

#[tokio::test]
async fn test_course_slugs_edit_and_save() {
    let remote = MemoryRemoteStore::new().with_document(
        "courses",
        json!({"courses": [
            {"id": "facial-aesthetic", "title": "Diploma"},
            {"id": "master-program", "title": "Master"}
        ]}),
    );
    let fixture = Fixture::with_remote(remote);
    let mut session = EditorSession::open(&fixture.manager, Section::Courses).await;

    session.set_field("title", "Programs").unwrap();
    session
        .update_item(
            None,
            &ItemId::from("master-program"),
            json!({"title": "Combined Master Program", "batchSize": 8}),
        )
        .unwrap();
    let added = session.add_item(None, json!({"title": "Peels"})).unwrap();
    assert_eq!(added, ItemId::Num(1));

    let outcome = session.save().await.unwrap();
    assert_eq!(outcome, SaveOutcome::Saved);

    let view: CoursesContent = fixture.manager.resolver().resolve_as(Section::Courses).await;
    assert_eq!(view.title, "Programs");
    let ids: Vec<ItemId> = view.courses.iter().map(|c| c.id.clone()).collect();
    assert_eq!(
        ids,
        vec![
            ItemId::from("facial-aesthetic"),
            ItemId::from("master-program"),
            ItemId::Num(1)
        ]
    );
    assert_eq!(view.courses[1].batch_size, 8);
}

#[tokio::test]
async fn test_remove_course_by_slug() {
    let fixture = Fixture::offline();
    let mut session = EditorSession::open(&fixture.manager, Section::Courses).await;

    let removed = session
        .remove_item(None, &ItemId::from("advanced-cosmetology"))
        .unwrap();

    assert_eq!(removed["title"], "Advanced Cosmetology Certification");
    assert_eq!(session.items(None).unwrap().len(), 2);
    assert!(session.validate().is_ok());
}

#[tokio::test]
async fn test_add_reports_exhausted_id_space() {
    let remote = MemoryRemoteStore::new()
        .with_document("faq", json!({"faqs": [{"id": u64::MAX, "question": "Last?"}]}));
    let fixture = Fixture::with_remote(remote);
    let mut session = EditorSession::open(&fixture.manager, Section::Faq).await;

    assert!(matches!(
        session.add_item(None, json!({"question": "One more?"})),
        Err(EditorError::Validation(ValidationError::IdSpaceExhausted))
    ));
    assert_eq!(session.items(None).unwrap().len(), 1);
    assert!(!session.is_dirty());
}

#[tokio::test]
async fn test_last_credential_cannot_be_deleted() {
    let remote = MemoryRemoteStore::new().with_document(
        "about",
        json!({"credentials": [{"id": 7, "icon": "Medal", "title": "Only"}]}),
    );
    let fixture = Fixture::with_remote(remote);
    let mut session = EditorSession::open(&fixture.manager, Section::About).await;

    let err = session.remove_item(None, &ItemId::Num(7)).unwrap_err();

    assert!(matches!(
        err,
        EditorError::Validation(ValidationError::BelowMinimum { min: 1, .. })
    ));
    assert_eq!(ids(session.items(None).unwrap()), vec![7]);
    assert!(!session.is_dirty());
}

#[tokio::test]
async fn test_delete_by_id() {
    let fixture = Fixture::offline();
    let mut session = EditorSession::open(&fixture.manager, Section::About).await;

    let removed = session.remove_item(None, &ItemId::Num(2)).unwrap();

    assert_eq!(removed["icon"], "Building");
    assert_eq!(ids(session.items(None).unwrap()), vec![1, 3, 4]);
}

#[tokio::test]
async fn test_unknown_item_id() {
    let fixture = Fixture::offline();
    let mut session = EditorSession::open(&fixture.manager, Section::Faq).await;

    assert!(matches!(
        session.update_item(None, &ItemId::Num(42), json!({"question": "?"})),
        Err(EditorError::Validation(ValidationError::ItemNotFound(ItemId::Num(42))))
    ));
    assert!(matches!(
        session.remove_item(None, &ItemId::Num(42)),
        Err(EditorError::Validation(ValidationError::ItemNotFound(ItemId::Num(42))))
    ));
}

#[tokio::test]
async fn test_faq_reorder_renumbers() {
    let fixture = Fixture::offline();
    let mut session = EditorSession::open(&fixture.manager, Section::Faq).await;
    let first_question = session.items(None).unwrap()[0]["question"].clone();

    let position = session.move_item(None, 0, Direction::Down).unwrap();

    assert_eq!(position, 1);
    let faqs = session.items(None).unwrap();
    assert_eq!(ids(faqs), vec![1, 2, 3, 4, 5]);
    assert_eq!(faqs[1]["question"], first_question);
}

#[tokio::test]
async fn test_unordered_reorder_keeps_ids() {
    let fixture = Fixture::offline();
    let mut session = EditorSession::open(&fixture.manager, Section::Footer).await;

    session
        .move_item(Some("quickLinks"), 1, Direction::Up)
        .unwrap();

    assert_eq!(ids(session.items(Some("quickLinks")).unwrap()), vec![2, 1]);
    assert_eq!(ids(session.items(Some("socialLinks")).unwrap()), vec![1, 2]);
}

#[tokio::test]
async fn test_move_out_of_range() {
    let fixture = Fixture::offline();
    let mut session = EditorSession::open(&fixture.manager, Section::Faq).await;

    assert!(matches!(
        session.move_item(None, 0, Direction::Up),
        Err(EditorError::Validation(ValidationError::PositionOutOfRange { position: 0, len: 5 }))
    ));
    assert!(!session.is_dirty());
}

#[tokio::test]
async fn test_unknown_list_field() {
    let fixture = Fixture::offline();
    let mut session = EditorSession::open(&fixture.manager, Section::Footer).await;

    assert!(matches!(
        session.add_item(Some("partners"), json!({})),
        Err(EditorError::Validation(ValidationError::UnknownList { .. }))
    ));
}

#[tokio::test]
async fn test_save_rejects_duplicate_ids() {
    let remote = MemoryRemoteStore::new().with_document(
        "testimonials",
        json!({"testimonials": [{"id": 1, "name": "A"}, {"id": 1, "name": "B"}]}),
    );
    let fixture = Fixture::with_remote(remote);
    let session = EditorSession::open(&fixture.manager, Section::Testimonials).await;

    assert!(matches!(
        session.save().await,
        Err(EditorError::Validation(ValidationError::DuplicateId(ItemId::Num(1))))
    ));
    assert_eq!(fixture.remote.upsert_count(), 0);
}

#[tokio::test]
async fn test_save_clears_dirty() {
    let fixture = Fixture::offline();
    let mut session = EditorSession::open(&fixture.manager, Section::Contact).await;
    assert_eq!(session.source(), ContentSource::Default);

    session.set_field("hours.line2", "Sat: Closed").unwrap();
    assert!(session.is_dirty());

    let outcome = session.save().await.unwrap();
    assert!(matches!(outcome, SaveOutcome::SavedLocallyOnly { .. }));
    assert!(!session.is_dirty());
}

#[tokio::test]
async fn test_failed_save_keeps_dirty() {
    let fixture = Fixture::new();
    fixture.cache.set_read_only(true);
    let mut session = EditorSession::open(&fixture.manager, Section::About).await;
    session.set_field("title", "Unsaved").unwrap();

    let outcome = session.save().await.unwrap();

    assert!(matches!(outcome, SaveOutcome::Failed { .. }));
    assert!(session.is_dirty());
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_saves_one_proceeds() {
    let remote = MemoryRemoteStore::new();
    remote.set_latency(Duration::from_millis(100));
    let fixture = Fixture::with_remote(remote);
    let mut session = EditorSession::open(&fixture.manager, Section::Faq).await;
    session.set_field("title", "Busy").unwrap();

    let (first, second) = tokio::join!(session.save(), session.save());

    let results = [first, second];
    let saved = results.iter().filter(|r| matches!(r, Ok(SaveOutcome::Saved))).count();
    let rejected = results
        .iter()
        .filter(|r| matches!(r, Err(EditorError::SaveInProgress)))
        .count();
    assert_eq!(saved, 1);
    assert_eq!(rejected, 1);
    assert_eq!(fixture.remote.upsert_count(), 1);
    assert!(!session.is_saving());
}

#[tokio::test(start_paused = true)]
async fn test_open_after_unmount_is_discarded() {
    let remote = MemoryRemoteStore::new();
    remote.set_latency(Duration::from_millis(200));
    let fixture = Fixture::with_remote(remote);
    let mount = Mount::new();

    let (session, ()) = tokio::join!(
        EditorSession::open_while_mounted(&fixture.manager, Section::About, &mount),
        async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            mount.unmount();
        }
    );

    assert!(session.is_none());
}

#[tokio::test]
async fn test_typed_view_of_session() {
    let fixture = Fixture::offline();
    let session = EditorSession::open(&fixture.manager, Section::Faq).await;

    let view: FaqContent = session.view();

    assert_eq!(view.title, "Frequently Asked Questions");
    assert_eq!(view.faqs.len(), 5);
}
