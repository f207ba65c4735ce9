//! Tests for the local cache
//!
//! - Checksummed file entries
//! - Tampered entries are treated as misses by the resolver

use std::fs;
use std::sync::Arc;

use institute_core::content::{
    CacheError, ContentConfig, ContentManager, ContentSource, FileCache, LocalCache, Section,
};
use tempfile::TempDir;

#[test]
fn test_file_cache_roundtrip() {
    let temp = TempDir::new().unwrap();
    let cache = FileCache::new(temp.path()).unwrap();

    cache.set("about", r#"{"title":"Saved"}"#).unwrap();

    assert_eq!(
        cache.get("about").unwrap().as_deref(),
        Some(r#"{"title":"Saved"}"#)
    );
    assert!(cache.dir().join("about.json").exists());
}

#[test]
fn test_file_cache_missing_entry() {
    let temp = TempDir::new().unwrap();
    let cache = FileCache::new(temp.path()).unwrap();

    assert!(cache.get("faq").unwrap().is_none());
}

#[test]
fn test_file_cache_overwrite_and_remove() {
    let temp = TempDir::new().unwrap();
    let cache = FileCache::new(temp.path()).unwrap();

    cache.set("faq", "{}").unwrap();
    cache.set("faq", r#"{"a":1}"#).unwrap();
    assert_eq!(cache.get("faq").unwrap().as_deref(), Some(r#"{"a":1}"#));

    cache.remove("faq").unwrap();
    assert!(cache.get("faq").unwrap().is_none());
    // Removing again is fine
    cache.remove("faq").unwrap();
}

#[test]
fn test_file_cache_detects_tampering() {
    let temp = TempDir::new().unwrap();
    let cache = FileCache::new(temp.path()).unwrap();
    cache.set("about", r#"{"title":"Original"}"#).unwrap();

    let path = cache.dir().join("about.json");
    let data = fs::read_to_string(&path).unwrap();
    fs::write(&path, data.replace("Original", "Tampered")).unwrap();

    assert!(matches!(cache.get("about"), Err(CacheError::Integrity(_))));
}

#[test]
fn test_file_cache_rejects_unenveloped_entry() {
    let temp = TempDir::new().unwrap();
    let cache = FileCache::new(temp.path()).unwrap();
    fs::write(cache.dir().join("footer.json"), "no envelope").unwrap();

    assert!(matches!(cache.get("footer"), Err(CacheError::Malformed(_))));
}

#[test]
fn test_file_cache_rejects_path_keys() {
    let temp = TempDir::new().unwrap();
    let cache = FileCache::new(temp.path()).unwrap();

    assert!(matches!(
        cache.set("../escape", "{}"),
        Err(CacheError::InvalidKey(_))
    ));
}

#[tokio::test]
async fn test_tampered_entry_resolves_to_default() {
    let temp = TempDir::new().unwrap();
    let cache = Arc::new(FileCache::new(temp.path()).unwrap());
    cache.set("about", r#"{"title":"Original"}"#).unwrap();

    let path = cache.dir().join("about.json");
    let data = fs::read_to_string(&path).unwrap();
    fs::write(&path, data.replace("Original", "Tampered")).unwrap();

    let manager = ContentManager::new(ContentConfig::default().without_remote(), None, cache);
    let resolved = manager
        .resolver()
        .resolve_detailed(Section::About, None)
        .await;

    assert_eq!(resolved.source, ContentSource::Default);
    assert_eq!(resolved.document, Section::About.default_document());
}

#[tokio::test]
async fn test_file_cache_survives_restart() {
    let temp = TempDir::new().unwrap();
    let config = ContentConfig::with_storage_path(temp.path()).without_remote();

    {
        let manager = ContentManager::from_config(config.clone()).unwrap();
        let outcome = manager
            .save(Section::Testimonials, &serde_json::json!({"title": "Kept"}))
            .await;
        assert!(outcome.is_persisted());
    }

    let manager = ContentManager::from_config(config).unwrap();
    let document = manager.resolver().resolve(Section::Testimonials).await;
    assert_eq!(document["title"], "Kept");
}
