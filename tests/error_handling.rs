//! Best-effort persistence: storage failures never reach the caller.

use artflow::{
    ArtworkId, ArtworkInput, ArtworkPatch, BlobStore, FileBlobStore, InventoryStore,
    MemoryBlobStore, StoreError,
};
use std::fs;
use tempfile::TempDir;

const KEY: &str = "artflow_artworks";

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Backend whose every operation fails.
struct BrokenBlobStore;

impl BlobStore for BrokenBlobStore {
    fn contains(&self, _key: &str) -> bool {
        false
    }

    fn get(&self, _key: &str) -> artflow::Result<Option<String>> {
        Err(StoreError::Io(std::io::Error::other("storage unavailable")))
    }

    fn set(&self, _key: &str, _value: &str) -> artflow::Result<()> {
        Err(StoreError::Io(std::io::Error::other("storage unavailable")))
    }

    fn remove(&self, _key: &str) -> artflow::Result<bool> {
        Err(StoreError::Io(std::io::Error::other("storage unavailable")))
    }
}

// --- Unreadable state ---

#[test]
fn test_corrupt_json_reads_as_empty() {
    init_tracing();
    let store = InventoryStore::new(MemoryBlobStore::new());
    store.blobs().set(KEY, "{not json").unwrap();

    assert!(store.get_all().is_empty());
    assert!(store.search("").is_empty());
    assert_eq!(store.stats().total, 0);
}

#[test]
fn test_unknown_status_reads_as_empty() {
    init_tracing();
    let store = InventoryStore::new(MemoryBlobStore::new());
    store
        .blobs()
        .set(
            KEY,
            r#"[{"id":"a","title":"t","artist":"x","year":1,"price":1,"status":"stolen","createdAt":1}]"#,
        )
        .unwrap();

    assert!(store.get_all().is_empty());
}

#[test]
fn test_null_price_keeps_collection() {
    init_tracing();
    let store = InventoryStore::new(MemoryBlobStore::new());
    store.init();

    let raw = store.blobs().get(KEY).unwrap().unwrap();
    let tampered = raw.replacen("\"price\":850000.0", "\"price\":null", 1);
    assert_ne!(raw, tampered);
    store.blobs().set(KEY, &tampered).unwrap();

    let stats = store.stats();
    assert_eq!(stats.total, 5);
    assert_eq!(stats.total_value, 3_900_000.0 - 850_000.0);
    assert_eq!(store.get_by_id(&ArtworkId::from("art_001")).unwrap().price, 0.0);

    // A later write must keep every other record.
    store.add(ArtworkInput::new("Rosso", "Alberto Burri", 1953));
    assert_eq!(store.stats().total, 6);
}

#[test]
fn test_empty_string_reads_as_empty() {
    let store = InventoryStore::new(MemoryBlobStore::new());
    store.blobs().set(KEY, "").unwrap();

    assert!(store.get_all().is_empty());
}

#[test]
fn test_init_replaces_corrupt_state() {
    init_tracing();
    let store = InventoryStore::new(MemoryBlobStore::new());
    store.blobs().set(KEY, "garbage").unwrap();

    store.init();
    assert_eq!(store.get_all().len(), 5);
}

// --- Dropped writes ---

#[test]
fn test_quota_exceeded_write_is_dropped() {
    init_tracing();
    let store = InventoryStore::new(MemoryBlobStore::with_quota(1_500));
    store.init();
    let before = store.get_all();
    assert_eq!(before.len(), 5);

    let long_title = "x".repeat(2_000);
    let added = store.add(ArtworkInput::new(long_title, "Anon", 2020));

    // The caller still gets the record back, but nothing was stored.
    assert!(added.id.as_str().starts_with("art_"));
    assert_eq!(store.get_by_id(&added.id), None);
    assert_eq!(store.get_all(), before);
}

#[test]
fn test_dropped_update_keeps_previous_state() {
    let store = InventoryStore::new(MemoryBlobStore::with_quota(1_500));
    store.init();
    let id = ArtworkId::from("art_001");

    let patch = ArtworkPatch {
        title: Some("y".repeat(2_000)),
        ..Default::default()
    };
    let updated = store.update(&id, patch).unwrap();

    assert_eq!(updated.title.len(), 2_000);
    assert_eq!(store.get_by_id(&id).unwrap().title, "Combustione Plastica");
}

#[test]
fn test_unavailable_backend() {
    init_tracing();
    let store = InventoryStore::new(BrokenBlobStore);

    store.init();
    store.reset();
    assert!(store.get_all().is_empty());

    let added = store.add(ArtworkInput::new("t", "a", 2000));
    assert_eq!(store.get_by_id(&added.id), None);
    assert_eq!(store.update(&added.id, ArtworkPatch::price(1.0)), None);
    assert!(!store.remove(&added.id));
    assert_eq!(store.stats().total, 0);
}

// --- File backend corruption ---

#[test]
fn test_corrupt_blob_file_reads_as_empty() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let blobs = FileBlobStore::new(dir.path(), 4).unwrap();
    let path = blobs.blob_path(KEY);
    let store = InventoryStore::new(blobs);
    store.init();

    fs::write(&path, b"ABL\0\x01 scrambled").unwrap();
    store.blobs().clear_cache();

    assert!(store.get_all().is_empty());
    assert!(matches!(store.blobs().get(KEY), Err(StoreError::Corruption(_))));
}

#[test]
fn test_lookup_misses_are_none() {
    let store = InventoryStore::new(MemoryBlobStore::new());
    store.init();
    let missing = ArtworkId::from("art_999");

    assert_eq!(store.get_by_id(&missing), None);
    assert_eq!(store.update(&missing, ArtworkPatch::price(5.0)), None);
    assert!(!store.remove(&missing));
    assert_eq!(store.get_all().len(), 5);
}
