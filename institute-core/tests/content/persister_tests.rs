//! Tests for saving section documents

use std::time::Duration;

use institute_core::content::{
    merge_documents, ContentConfig, ContentSource, LocalCache, MemoryRemoteStore, SaveOutcome,
    Section,
};
use serde_json::json;

use super::support::Fixture;

#[tokio::test]
async fn test_save_then_resolve_from_remote() {
    let fixture = Fixture::new();
    let document = json!({"title": "New About", "credentials": [{"id": 1, "icon": "Star"}]});

    let outcome = fixture.manager.persister().save(Section::About, &document).await;

    assert_eq!(outcome, SaveOutcome::Saved);
    assert_eq!(fixture.remote.document("about"), Some(document.clone()));

    let resolved = fixture
        .manager
        .resolver()
        .resolve_detailed(Section::About, None)
        .await;
    assert_eq!(resolved.source, ContentSource::Remote);
    assert_eq!(
        resolved.document,
        merge_documents(&Section::About.default_document(), &document)
    );
}

#[tokio::test]
async fn test_saved_document_survives_remote_outage() {
    let fixture = Fixture::new();
    let document = json!({"title": "Mirrored"});

    let outcome = fixture.manager.save(Section::Faq, &document).await;
    assert_eq!(outcome, SaveOutcome::Saved);

    fixture.remote.set_available(false);
    let resolved = fixture
        .manager
        .resolver()
        .resolve_detailed(Section::Faq, None)
        .await;

    assert_eq!(resolved.source, ContentSource::Cache);
    assert_eq!(
        resolved.document,
        merge_documents(&Section::Faq.default_document(), &document)
    );
}

#[tokio::test]
async fn test_remote_down_saves_locally_only() {
    let fixture = Fixture::offline();
    let document = json!({"tagline": "Offline edit"});

    let outcome = fixture.manager.save(Section::Footer, &document).await;

    assert!(matches!(outcome, SaveOutcome::SavedLocallyOnly { .. }));
    assert!(outcome.is_persisted());
    assert_eq!(fixture.remote.upsert_count(), 0);
    assert!(fixture.cache.get("footer").unwrap().is_some());

    let resolved = fixture.manager.resolver().resolve(Section::Footer).await;
    assert_eq!(resolved["tagline"], "Offline edit");
}

#[tokio::test]
async fn test_disabled_remote_saves_locally_only() {
    let fixture = Fixture::with_config(
        MemoryRemoteStore::new(),
        ContentConfig::default().without_remote(),
    );

    let outcome = fixture.manager.save(Section::Contact, &json!({"title": "T"})).await;

    assert!(matches!(outcome, SaveOutcome::SavedLocallyOnly { .. }));
    assert_eq!(fixture.remote.upsert_count(), 0);
}

#[tokio::test]
async fn test_cache_write_failure_is_fatal() {
    let fixture = Fixture::new();
    fixture.cache.set_read_only(true);

    let outcome = fixture.manager.save(Section::About, &json!({"title": "Lost"})).await;

    assert!(matches!(outcome, SaveOutcome::Failed { .. }));
    assert!(!outcome.is_persisted());
    assert_eq!(fixture.remote.upsert_count(), 0);
    assert!(fixture.remote.document("about").is_none());
}

#[tokio::test]
async fn test_saving_twice_is_idempotent() {
    let once = Fixture::new();
    let twice = Fixture::new();
    let document = json!({"title": "Same", "faqs": [{"id": 1, "question": "Q", "answer": "A"}]});

    once.manager.save(Section::Faq, &document).await;
    twice.manager.save(Section::Faq, &document).await;
    twice.manager.save(Section::Faq, &document).await;

    let a = once.manager.resolver().resolve(Section::Faq).await;
    let b = twice.manager.resolver().resolve(Section::Faq).await;
    assert_eq!(a, b);
}

#[tokio::test(start_paused = true)]
async fn test_slow_upsert_times_out_to_local_only() {
    let remote = MemoryRemoteStore::new();
    remote.set_latency(Duration::from_secs(60));
    let fixture = Fixture::with_config(
        remote,
        ContentConfig::default().with_timeout(Duration::from_millis(100)),
    );

    let outcome = fixture.manager.save(Section::Courses, &json!({"title": "Slow"})).await;

    match outcome {
        SaveOutcome::SavedLocallyOnly { reason } => assert!(reason.contains("timed out")),
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[tokio::test]
async fn test_user_messages() {
    assert_eq!(SaveOutcome::Saved.user_message(), "Changes saved successfully");
    let local = SaveOutcome::SavedLocallyOnly {
        reason: "offline".into(),
    };
    assert_eq!(local.user_message(), "Changes saved to local storage only");
}
