//! Tests for the resolver fallback chain

use std::time::Duration;

use institute_core::content::{ContentSource, LocalCache, MemoryRemoteStore, Section};
use institute_core::editor::{ItemId, Mount};
use institute_core::sections::{AboutContent, CoursesContent};
use serde_json::json;

use super::support::Fixture;

#[tokio::test]
async fn test_remote_overrides_and_default_fills() {
    let remote = MemoryRemoteStore::new().with_document("about", json!({"title": "Our Story"}));
    let fixture = Fixture::with_remote(remote);

    let resolved = fixture
        .manager
        .resolver()
        .resolve_detailed(Section::About, None)
        .await;

    let default = Section::About.default_document();
    assert_eq!(resolved.source, ContentSource::Remote);
    assert_eq!(resolved.document["title"], "Our Story");
    assert_eq!(resolved.document["subtitle"], default["subtitle"]);
    assert_eq!(resolved.document["credentials"], default["credentials"]);
}

#[tokio::test]
async fn test_remote_failure_uses_cache() {
    let fixture = Fixture::new();
    fixture.remote.set_available(false);
    fixture
        .cache
        .set("faq", r#"{"title": "Cached FAQ"}"#)
        .unwrap();

    let resolved = fixture
        .manager
        .resolver()
        .resolve_detailed(Section::Faq, None)
        .await;

    assert_eq!(resolved.source, ContentSource::Cache);
    assert_eq!(resolved.document["title"], "Cached FAQ");
    assert_eq!(
        resolved.document["faqs"],
        Section::Faq.default_document()["faqs"]
    );
}

#[tokio::test]
async fn test_missing_remote_document_uses_cache() {
    let fixture = Fixture::new();
    fixture
        .cache
        .set("footer", r#"{"tagline": "Cached"}"#)
        .unwrap();

    let resolved = fixture
        .manager
        .resolver()
        .resolve_detailed(Section::Footer, None)
        .await;

    assert_eq!(resolved.source, ContentSource::Cache);
    assert_eq!(resolved.document["tagline"], "Cached");
}

#[tokio::test]
async fn test_total_failure_returns_exact_default() {
    let fixture = Fixture::offline();
    let resolver = fixture.manager.resolver();

    for section in Section::ALL {
        let resolved = resolver.resolve_detailed(section, None).await;
        assert_eq!(resolved.source, ContentSource::Default);
        assert_eq!(resolved.document, section.default_document());
    }
}

#[tokio::test]
async fn test_about_scenario_remote_down_cache_empty() {
    let fixture = Fixture::offline();

    let about = fixture.manager.resolver().resolve(Section::About).await;

    assert_eq!(about["title"], "About the Institute");
    let credentials = about["credentials"].as_array().unwrap();
    let ids: Vec<u64> = credentials.iter().map(|c| c["id"].as_u64().unwrap()).collect();
    let icons: Vec<&str> = credentials.iter().map(|c| c["icon"].as_str().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(icons, vec!["Medal", "Building", "Users", "GraduationCap"]);
}

#[tokio::test]
async fn test_non_object_remote_document_is_skipped() {
    let remote = MemoryRemoteStore::new().with_document("contact", json!("not a document"));
    let fixture = Fixture::with_remote(remote);

    let resolved = fixture
        .manager
        .resolver()
        .resolve_detailed(Section::Contact, None)
        .await;

    assert_eq!(resolved.source, ContentSource::Default);
}

#[tokio::test]
async fn test_unparseable_cache_entry_uses_default() {
    let fixture = Fixture::offline();
    fixture.cache.set("whyus", "{ not json").unwrap();

    let resolved = fixture
        .manager
        .resolver()
        .resolve_detailed(Section::WhyUs, None)
        .await;

    assert_eq!(resolved.source, ContentSource::Default);
    assert_eq!(resolved.document, Section::WhyUs.default_document());
}

#[tokio::test(start_paused = true)]
async fn test_slow_remote_times_out_to_cache() {
    let remote = MemoryRemoteStore::new().with_document("faq", json!({"title": "Remote"}));
    remote.set_latency(Duration::from_secs(30));
    let fixture = Fixture::with_remote(remote);
    fixture.cache.set("faq", r#"{"title": "Cached"}"#).unwrap();

    let document = fixture
        .manager
        .resolver()
        .resolve_with_timeout(Section::Faq, Duration::from_millis(50))
        .await;

    assert_eq!(document["title"], "Cached");
}

#[tokio::test(start_paused = true)]
async fn test_result_after_unmount_is_discarded() {
    let remote = MemoryRemoteStore::new();
    remote.set_latency(Duration::from_millis(200));
    let fixture = Fixture::with_remote(remote);
    let resolver = fixture.manager.resolver();
    let mount = Mount::new();

    let (result, ()) = tokio::join!(resolver.resolve_while_mounted(Section::Faq, &mount), async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        mount.unmount();
    });

    assert!(result.is_none());
}

#[tokio::test]
async fn test_result_while_mounted_is_delivered() {
    let fixture = Fixture::offline();
    let mount = Mount::new();

    let result = fixture
        .manager
        .resolver()
        .resolve_while_mounted(Section::Faq, &mount)
        .await;

    assert_eq!(result, Some(Section::Faq.default_document()));
}

#[tokio::test]
async fn test_resolve_as_typed_view() {
    let remote = MemoryRemoteStore::new().with_document("about", json!({"title": "Typed"}));
    let fixture = Fixture::with_remote(remote);

    let about: AboutContent = fixture.manager.resolver().resolve_as(Section::About).await;

    assert_eq!(about.title, "Typed");
    assert_eq!(about.credentials.len(), 4);
}

#[tokio::test]
async fn test_resolve_as_falls_back_when_document_does_not_fit() {
    let remote = MemoryRemoteStore::new().with_document("about", json!({"credentials": "oops"}));
    let fixture = Fixture::with_remote(remote);

    let about: AboutContent = fixture.manager.resolver().resolve_as(Section::About).await;

    assert_eq!(about.title, "About the Institute");
    assert_eq!(about.credentials.len(), 4);
}

#[tokio::test]
async fn test_resolve_as_keeps_remote_fields_beside_a_misfit() {
    let remote = MemoryRemoteStore::new().with_document(
        "courses",
        json!({
            "title": "Remote Courses",
            "courses": [
                {"id": "peel-basics", "title": "Chemical Peels", "batchSize": 6},
                {"id": "broken", "batchSize": "many"}
            ]
        }),
    );
    let fixture = Fixture::with_remote(remote);

    let courses: CoursesContent = fixture.manager.resolver().resolve_as(Section::Courses).await;

    assert_eq!(courses.title, "Remote Courses");
    assert!(courses.subtitle.starts_with("Choose from our range"));
    assert_eq!(courses.courses.len(), 1);
    assert_eq!(courses.courses[0].id, ItemId::from("peel-basics"));
}
