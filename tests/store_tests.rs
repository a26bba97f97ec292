use portico::models::{Role, UserRecord};
use portico::services::UserStore;
use portico::utils::{generate_record_id, now_iso};
use tempfile::tempdir;

fn sample_record(email: &str) -> UserRecord {
    UserRecord {
        id: generate_record_id(),
        name: "Ada Lovelace".into(),
        email: email.into(),
        password: "secret1".into(),
        role: Role::Student,
        login_time: now_iso(),
        created_at: now_iso(),
    }
}

#[tokio::test]
async fn store_is_created_lazily_on_first_append() {
    let dir = tempdir().unwrap();
    // Point at a nested directory that does not exist yet.
    let store = UserStore::new(dir.path().join("data"));
    assert!(!store.file_path().exists());
    assert!(store.load().await.is_empty());

    let total = store.append(sample_record("ada@campus.edu")).await.unwrap();
    assert_eq!(total, 1);
    assert!(store.file_path().exists());
    assert_eq!(store.load().await.len(), 1);
}

#[tokio::test]
async fn appending_the_same_payload_twice_keeps_both_records() {
    let dir = tempdir().unwrap();
    let store = UserStore::new(dir.path().join("data"));

    assert_eq!(store.append(sample_record("ada@campus.edu")).await.unwrap(), 1);
    assert_eq!(store.append(sample_record("ada@campus.edu")).await.unwrap(), 2);

    let users = store.load().await;
    assert_eq!(users.len(), 2);
    assert_ne!(users[0].id, users[1].id);
}

#[tokio::test]
async fn records_round_trip_through_the_file() {
    let dir = tempdir().unwrap();
    let store = UserStore::new(dir.path().join("data"));

    let record = UserRecord {
        id: 1754470200000.25,
        name: "Grace Hopper".into(),
        email: "grace@campus.edu".into(),
        password: "compilers".into(),
        role: Role::SecurityGuard,
        login_time: "2026-08-06T09:30:00.000Z".into(),
        created_at: "2026-08-06T09:30:00.123Z".into(),
    };
    store.append(record.clone()).await.unwrap();

    let users = store.load().await;
    assert_eq!(users.len(), 1);
    let read = &users[0];
    assert_eq!(read.id, record.id);
    assert_eq!(read.name, record.name);
    assert_eq!(read.email, record.email);
    assert_eq!(read.password, record.password);
    assert_eq!(read.role, record.role);
    assert_eq!(read.login_time, record.login_time);
    assert_eq!(read.created_at, record.created_at);
}

#[tokio::test]
async fn store_file_uses_camel_case_keys_and_two_space_indent() {
    let dir = tempdir().unwrap();
    let store = UserStore::new(dir.path().join("data"));
    store.append(sample_record("ada@campus.edu")).await.unwrap();

    let text = tokio::fs::read_to_string(store.file_path()).await.unwrap();
    assert!(text.contains("\n  {"));
    assert!(text.contains("\"loginTime\""));
    assert!(text.contains("\"createdAt\""));
    assert!(!text.contains("login_time"));
}

#[tokio::test]
async fn corrupt_store_reads_as_empty_and_is_overwritten() {
    let dir = tempdir().unwrap();
    let data_dir = dir.path().join("data");
    tokio::fs::create_dir_all(&data_dir).await.unwrap();
    let store = UserStore::new(&data_dir);
    tokio::fs::write(store.file_path(), "{not json").await.unwrap();

    assert!(store.load().await.is_empty());

    let total = store.append(sample_record("ada@campus.edu")).await.unwrap();
    assert_eq!(total, 1);
    assert_eq!(store.load().await.len(), 1);
}

#[tokio::test]
async fn non_array_store_reads_as_empty() {
    let dir = tempdir().unwrap();
    let data_dir = dir.path().join("data");
    tokio::fs::create_dir_all(&data_dir).await.unwrap();
    let store = UserStore::new(&data_dir);
    tokio::fs::write(store.file_path(), "{\"users\": []}").await.unwrap();

    assert!(store.load().await.is_empty());
}

#[tokio::test]
async fn duplicate_email_is_appended_not_upserted() {
    let dir = tempdir().unwrap();
    let store = UserStore::new(dir.path().join("data"));

    store.append(sample_record("ada@campus.edu")).await.unwrap();
    // Same address with different casing still appends.
    let total = store.append(sample_record("Ada@Campus.EDU")).await.unwrap();
    assert_eq!(total, 2);
}
