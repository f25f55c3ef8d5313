use claims::{assert_err, assert_ok};
use imdev::storage::{FileBackend, PreferenceStore, StorageError};
use serde_json::{Value, json};
use std::sync::Arc;
use tempfile::TempDir;

fn file_store() -> (TempDir, PreferenceStore) {
    let dir = tempfile::tempdir().unwrap();
    let backend = FileBackend::new(dir.path().join("storage.json"));
    (dir, PreferenceStore::new(Arc::new(backend)))
}

#[test]
fn test_round_trip_of_json_values() {
    let (_dir, store) = file_store();
    let values = [
        json!(null),
        json!(true),
        json!(42),
        json!("深色"),
        json!([1, "two", {"three": 3.5}]),
        json!({"darkMode": true, "primaryColor": "#ff0000", "nested": {"a": []}}),
    ];

    for (i, value) in values.iter().enumerate() {
        let key = format!("k{i}");
        assert_ok!(store.set(&key, value));
        assert_eq!(&store.get::<Value>(&key).unwrap(), value);
    }
}

#[test]
fn test_remove_then_get_fails() {
    let (_dir, store) = file_store();
    store.set("theme", &json!({"darkMode": true})).unwrap();

    assert_ok!(store.remove("theme"));
    assert_err!(store.get::<Value>("theme"));
    assert!(matches!(
        store.get::<Value>("theme"),
        Err(StorageError::NotFoundOrMalformed { .. })
    ));
}

#[test]
fn test_values_survive_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    PreferenceStore::new(Arc::new(FileBackend::new(&path)))
        .set("locale", &json!({"locale": "en_GB", "language": "en"}))
        .unwrap();

    let reopened = PreferenceStore::new(Arc::new(FileBackend::new(&path)));
    assert_eq!(
        reopened.get::<Value>("locale").unwrap()["language"],
        json!("en")
    );

    let raw: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(raw.get("imdev-locale").is_some());
}

#[test]
fn test_type_mismatch_is_malformed() {
    let (_dir, store) = file_store();
    store.set("sidebar", &"collapsed").unwrap();
    assert!(matches!(
        store.get::<bool>("sidebar"),
        Err(StorageError::NotFoundOrMalformed { .. })
    ));
}
