use std::sync::atomic::{AtomicUsize, Ordering};

use portal::session::{ROLE_KEY, TOKEN_KEY};
use portal::{Role, Session, SessionStore};

use super::*;

static NEXT: AtomicUsize = AtomicUsize::new(0);

fn scratch_path() -> PathBuf {
    let n = NEXT.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("college-cli-test-{}-{n}.json", std::process::id()))
}

#[test]
fn missing_file_reads_empty() {
    let storage = FileStorage::new(scratch_path());
    assert_eq!(storage.get_item(TOKEN_KEY), None);
}

#[test]
fn set_then_get_persists_across_instances() {
    let path = scratch_path();
    FileStorage::new(&path).set_item(TOKEN_KEY, "abc").unwrap();
    assert_eq!(FileStorage::new(&path).get_item(TOKEN_KEY), Some("abc".into()));
    fs::remove_file(&path).unwrap();
}

#[test]
fn removing_last_key_deletes_file() {
    let path = scratch_path();
    let storage = FileStorage::new(&path);
    storage.set_item(TOKEN_KEY, "abc").unwrap();
    storage.remove_item(TOKEN_KEY).unwrap();
    assert!(!path.exists());
}

#[test]
fn remove_missing_key_is_ok() {
    let storage = FileStorage::new(scratch_path());
    assert!(storage.remove_item(ROLE_KEY).is_ok());
}

#[test]
fn corrupt_file_reads_empty_and_is_overwritten() {
    let path = scratch_path();
    fs::write(&path, "not json").unwrap();
    let storage = FileStorage::new(&path);
    assert_eq!(storage.get_item(TOKEN_KEY), None);
    storage.set_item(TOKEN_KEY, "fresh").unwrap();
    assert_eq!(storage.get_item(TOKEN_KEY), Some("fresh".into()));
    fs::remove_file(&path).unwrap();
}

#[test]
fn session_store_round_trips_through_file() {
    let path = scratch_path();
    let store = SessionStore::new(FileStorage::new(&path));
    store.set(&Session::new("tok", Role::Faculty)).unwrap();

    let raw: BTreeMap<String, String> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw.get(ROLE_KEY).map(String::as_str), Some("Faculty"));

    assert_eq!(store.get(), Some(Session::new("tok", Role::Faculty)));
    store.clear().unwrap();
    assert_eq!(store.get(), None);
    assert!(!path.exists());
}
