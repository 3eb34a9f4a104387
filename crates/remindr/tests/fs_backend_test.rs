use remindr::error::RemindrError;
use remindr::model::{RecurringMode, Reminder};
use remindr::store::backend::CollectionBackend;
use remindr::store::fs_backend::FsBackend;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_io() {
    let (_dir, backend) = setup();

    // 1. Write
    backend.add_item(&Reminder::once("r1", 1_000)).unwrap();

    // 2. Read
    let loaded = backend.get_item("r1").unwrap().unwrap();
    assert_eq!(loaded.date, Some(1_000));

    // 3. Delete
    backend.remove_item("r1").unwrap();
    assert!(backend.get_item("r1").unwrap().is_none());
}

#[test]
fn test_fs_backend_missing_file_is_empty() {
    let (_dir, backend) = setup();
    assert!(backend.items().unwrap().is_empty());
    assert!(backend.get_item("anything").unwrap().is_none());
    // Removing from an empty collection does not create the file.
    backend.remove_item("anything").unwrap();
    assert!(!backend.data_file().exists());
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();
    backend.add_item(&Reminder::once("r1", 1)).unwrap();
    backend.add_item(&Reminder::once("r2", 2)).unwrap();

    assert!(dir.path().join("reminders.json").exists());

    // Verify NO .tmp files are left behind
    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_on_disk_format() {
    let (dir, backend) = setup();
    let reminder = Reminder::repeating("weekly", RecurringMode::Week, vec![5, 1], 0);
    backend.add_item(&reminder).unwrap();

    let on_disk = fs::read_to_string(dir.path().join("reminders.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&on_disk).unwrap();
    assert_eq!(value["weekly"]["type"], "reminder");
    assert_eq!(value["weekly"]["recurringMode"], "week");
    // Stored as given, not sorted.
    assert_eq!(value["weekly"]["selectedDays"], serde_json::json!([5, 1]));
}

#[test]
fn test_fs_backend_survives_reopen() {
    let (dir, backend) = setup();
    backend.add_item(&Reminder::once("r1", 1)).unwrap();
    backend.add_item(&Reminder::permanent("r2")).unwrap();
    drop(backend);

    let reopened = FsBackend::new(dir.path().to_path_buf());
    let raw = reopened.raw().unwrap();
    assert_eq!(raw.len(), 2);
    assert_eq!(raw["r1"], Reminder::once("r1", 1));
}

#[test]
fn test_fs_backend_custom_file_name_and_nested_dir() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("nested").join("store");
    let backend = FsBackend::new(root.clone()).with_file_name("mine.json");

    backend.add_item(&Reminder::once("r1", 1)).unwrap();
    assert!(root.join("mine.json").exists());
}

#[test]
fn test_fs_backend_corrupt_file_is_serialization_error() {
    let (dir, backend) = setup();
    fs::write(dir.path().join("reminders.json"), "{ not json").unwrap();

    assert!(matches!(
        backend.items(),
        Err(RemindrError::Serialization(_))
    ));
    // Writes fail too rather than clobbering the file.
    assert!(backend.add_item(&Reminder::once("r1", 1)).is_err());
    let still = fs::read_to_string(dir.path().join("reminders.json")).unwrap();
    assert_eq!(still, "{ not json");
}
