//! Tests for AnimalStore
//!
//! These tests verify:
//! - Opening from an existing, missing or corrupt document
//! - Id assignment from the pre-append length
//! - Every successful create rewrites the document
//! - Rejected drafts leave memory and disk untouched
//! - Failed writes roll back the in-memory append
//! - Concurrent creates get distinct ids

use std::fs;
use std::sync::Arc;
use std::thread;

use serde_json::json;
use tempfile::TempDir;
use zookeepr::model::{Animal, AnimalDraft};
use zookeepr::query::AnimalQuery;
use zookeepr::storage::DocumentFile;
use zookeepr::{AnimalStore, Config, ZooError};

// =============================================================================
// Helper Functions
// =============================================================================

fn seed() -> Vec<Animal> {
    vec![Animal::new(
        "0",
        "A",
        "cat",
        "omnivore",
        vec!["quirky".to_string()],
    )]
}

fn setup_temp_store() -> (TempDir, AnimalStore) {
    let temp_dir = TempDir::new().unwrap();
    let document = DocumentFile::new(temp_dir.path().join("animals.json"));
    let store = AnimalStore::with_animals(document, seed());
    (temp_dir, store)
}

fn draft(name: &str, species: &str, diet: &str, traits: &[&str]) -> AnimalDraft {
    AnimalDraft::from_value(json!({
        "name": name,
        "species": species,
        "diet": diet,
        "personalityTraits": traits,
    }))
}

// =============================================================================
// Open Tests
// =============================================================================

#[test]
fn test_open_missing_document_starts_empty() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .data_file(temp_dir.path().join("animals.json"))
        .build();

    let store = AnimalStore::open(&config).unwrap();

    assert!(store.is_empty());
    assert!(!temp_dir.path().join("animals.json").exists());
}

#[test]
fn test_open_existing_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("animals.json");
    DocumentFile::new(&path).save(&seed()).unwrap();

    let config = Config::builder().data_file(&path).build();
    let store = AnimalStore::open(&config).unwrap();

    assert_eq!(store.snapshot(), seed());
    assert_eq!(store.document_path(), path.as_path());
}

#[test]
fn test_open_corrupt_document_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("animals.json");
    fs::write(&path, "not json").unwrap();

    let config = Config::builder().data_file(&path).build();
    assert!(matches!(
        AnimalStore::open(&config),
        Err(ZooError::Storage(_))
    ));
}

#[test]
fn test_loaded_records_are_trusted() {
    let temp_dir = TempDir::new().unwrap();
    let document = DocumentFile::new(temp_dir.path().join("animals.json"));
    let odd = Animal::new("0", "", "", "", vec![]);

    let store = AnimalStore::with_animals(document, vec![odd.clone()]);

    assert_eq!(store.get("0").unwrap(), odd);
}

// =============================================================================
// Read Tests
// =============================================================================

#[test]
fn test_list_with_query() {
    let (_temp, store) = setup_temp_store();

    assert_eq!(store.list(&AnimalQuery::new().diet("omnivore")), seed());
    assert!(store.list(&AnimalQuery::new().species("dog")).is_empty());
}

#[test]
fn test_get_missing_is_not_found() {
    let (_temp, store) = setup_temp_store();

    assert!(matches!(store.get("99"), Err(ZooError::AnimalNotFound)));
}

// =============================================================================
// Create Tests
// =============================================================================

#[test]
fn test_create_assigns_length_id() {
    let (temp, store) = setup_temp_store();

    let created = store
        .create(draft("B", "dog", "carnivore", &["loyal"]))
        .unwrap();

    assert_eq!(created.id, "1");
    assert_eq!(store.len(), 2);
    assert_eq!(store.get("1").unwrap(), created);

    let on_disk = DocumentFile::new(temp.path().join("animals.json"))
        .load()
        .unwrap()
        .unwrap();
    assert_eq!(on_disk.len(), 2);
    assert_eq!(on_disk[0], seed()[0]);
    assert_eq!(on_disk[1], created);
}

#[test]
fn test_create_appends_one_per_call() {
    let (_temp, store) = setup_temp_store();

    for expected in 1..5 {
        let before = store.len();
        let created = store
            .create(draft("B", "dog", "carnivore", &["loyal"]))
            .unwrap();
        assert_eq!(created.id, before.to_string());
        assert_eq!(created.id, expected.to_string());
        assert_eq!(store.len(), before + 1);
    }
}

#[test]
fn test_create_into_empty_store() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data").join("animals.json");
    let store = AnimalStore::with_animals(DocumentFile::new(&path), Vec::new());

    let created = store
        .create(draft("B", "dog", "carnivore", &["loyal"]))
        .unwrap();

    assert_eq!(created.id, "0");
    assert!(path.exists());
}

#[test]
fn test_create_rejects_missing_diet() {
    let (temp, store) = setup_temp_store();
    let body = json!({
        "name": "B",
        "species": "dog",
        "personalityTraits": ["loyal"],
    });

    let result = store.create(AnimalDraft::from_value(body));

    assert!(matches!(result, Err(ZooError::InvalidAnimal)));
    assert_eq!(store.len(), 1);
    // Nothing was written
    assert!(!temp.path().join("animals.json").exists());
}

#[test]
fn test_create_rejects_non_string_traits() {
    let (temp, store) = setup_temp_store();
    let body = json!({
        "name": "B",
        "species": "dog",
        "diet": "carnivore",
        "personalityTraits": [1],
    });

    assert!(matches!(
        store.create(AnimalDraft::from_value(body)),
        Err(ZooError::InvalidAnimal)
    ));
    assert_eq!(store.len(), 1);
    assert!(!temp.path().join("animals.json").exists());
}

#[test]
fn test_failed_write_rolls_back() {
    let temp_dir = TempDir::new().unwrap();
    // A directory where the file should be makes the write fail
    let path = temp_dir.path().join("animals.json");
    fs::create_dir_all(&path).unwrap();
    let store = AnimalStore::with_animals(DocumentFile::new(&path), seed());

    let result = store.create(draft("B", "dog", "carnivore", &["loyal"]));

    assert!(matches!(result, Err(ZooError::Io(_))));
    assert_eq!(store.snapshot(), seed());

    // The next successful create still gets the next length-based id
    fs::remove_dir(&path).unwrap();
    let created = store
        .create(draft("C", "owl", "carnivore", &["wise"]))
        .unwrap();
    assert_eq!(created.id, "1");
}

#[test]
fn test_reopen_sees_created_records() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .data_file(temp_dir.path().join("animals.json"))
        .build();

    {
        let store = AnimalStore::open(&config).unwrap();
        store
            .create(draft("B", "dog", "carnivore", &["loyal"]))
            .unwrap();
        store
            .create(draft("C", "owl", "carnivore", &["wise"]))
            .unwrap();
    }

    let store = AnimalStore::open(&config).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.get("1").unwrap().name, "C");
}

// =============================================================================
// Concurrency Tests
// =============================================================================

#[test]
fn test_concurrent_creates_get_distinct_ids() {
    let (_temp, store) = setup_temp_store();
    let store = Arc::new(store);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                store
                    .create(draft(&format!("n{}", i), "dog", "carnivore", &["loyal"]))
                    .unwrap()
                    .id
            })
        })
        .collect();

    let mut ids: Vec<usize> = handles
        .into_iter()
        .map(|h| h.join().unwrap().parse().unwrap())
        .collect();
    ids.sort();

    assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    assert_eq!(store.len(), 9);
}
