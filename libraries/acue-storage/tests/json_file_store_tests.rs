/// Integration tests for the JSON file record store
///
/// These tests use REAL files in a temporary directory to exercise the
/// exact on-disk layout and the atomic replace on save.
use acue_core::{AcueError, RecordStore, UserRecord};
use acue_storage::JsonFileStore;
use tempfile::TempDir;

fn record(username: &str) -> UserRecord {
    UserRecord::new(username, "5e".repeat(32), "acuestore.com")
}

fn store_in(dir: &TempDir) -> JsonFileStore {
    JsonFileStore::new(dir.path().join("users.json"))
}

#[tokio::test]
async fn test_missing_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let records = store.load().await.expect("Missing file should not be an error");
    assert!(records.is_empty());
    assert!(!store.path().exists(), "Loading must not create the file");
}

#[tokio::test]
async fn test_save_then_load_preserves_order() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let records = vec![record("alice"), record("bob"), record("carol")];
    store.save(&records).await.unwrap();

    let loaded = store.load().await.unwrap();
    assert_eq!(loaded, records);
}

#[tokio::test]
async fn test_load_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.save(&[record("alice"), record("bob")]).await.unwrap();

    let first = store.load().await.unwrap();
    let second = store.load().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_save_overwrites_whole_file() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.save(&[record("alice"), record("bob")]).await.unwrap();
    let carol = record("carol");
    store.save(&[carol.clone()]).await.unwrap();

    assert_eq!(store.load().await.unwrap(), vec![carol]);
}

#[tokio::test]
async fn test_file_layout_is_pretty_json_array() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let alice = record("alice");
    store.save(&[alice.clone()]).await.unwrap();

    let text = std::fs::read_to_string(store.path()).unwrap();
    assert!(text.starts_with("[\n  {"), "Expected 2-space indented array, got: {text}");

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let entry = &value.as_array().unwrap()[0];
    let mut keys: Vec<&str> = entry.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["created_at", "email", "id", "password", "username"]);
    assert_eq!(entry["password"], alice.password_digest);
}

#[tokio::test]
async fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data").join("accounts").join("users.json");
    let store = JsonFileStore::new(&path);

    store.save(&[record("alice")]).await.unwrap();

    assert!(path.exists());
}

#[tokio::test]
async fn test_save_leaves_no_temp_file() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.save(&[record("alice")]).await.unwrap();

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("users.json")]);
}

#[tokio::test]
async fn test_existing_python_era_file_loads() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    std::fs::write(
        store.path(),
        r#"[
  {
    "id": "0b8c3a8e-4f8e-4a51-9a57-2f1a0c0d4e11",
    "username": "bob",
    "password": "5d41402abc4b2a76b9719d911017c592",
    "email": "bob@acuestore.com",
    "created_at": "2024-05-02T10:11:12.131415",
    "is_banned": false
  }
]"#,
    )
    .unwrap();

    let records = store.load().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].username, "bob");
    assert_eq!(records[0].id.as_str(), "0b8c3a8e-4f8e-4a51-9a57-2f1a0c0d4e11");
}

#[tokio::test]
async fn test_corrupt_file_is_a_storage_error() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    std::fs::write(store.path(), "[{\"id\": ").unwrap();

    let err = store.load().await.unwrap_err();
    assert!(matches!(err, AcueError::Storage(_)), "Unexpected error: {err:?}");
}

#[tokio::test]
async fn test_non_array_document_is_rejected() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    std::fs::write(store.path(), r#"{"users": []}"#).unwrap();

    assert!(store.load().await.is_err());
}

#[tokio::test]
async fn test_unreadable_path_is_a_storage_error() {
    let dir = TempDir::new().unwrap();
    // A directory where the file should be cannot be read as records
    let path = dir.path().join("users.json");
    std::fs::create_dir(&path).unwrap();
    let store = JsonFileStore::new(&path);

    let err = store.load().await.unwrap_err();
    assert!(matches!(err, AcueError::Storage(_)));
}

#[tokio::test]
async fn test_write_failure_is_a_storage_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.json");
    std::fs::create_dir(&path).unwrap();
    std::fs::write(path.join("occupied"), "x").unwrap();
    let store = JsonFileStore::new(&path);

    let err = store.save(&[record("alice")]).await.unwrap_err();
    assert!(matches!(err, AcueError::Storage(_)));
}
