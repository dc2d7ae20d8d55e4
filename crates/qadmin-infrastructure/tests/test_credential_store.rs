use qadmin_core::auth::{CredentialStore, Credentials};
use qadmin_infrastructure::FileCredentialStore;
use tempfile::TempDir;

#[test]
fn test_credentials_survive_restart() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("qa_admin_auth.json");

    // First "process" logs in
    {
        let store = FileCredentialStore::with_path(path.clone());
        store
            .save(&Credentials::new("admin", "secret"))
            .expect("Should save credentials");
    }

    // Second "process" reads them back at startup
    let store = FileCredentialStore::with_path(path);
    let loaded = store.load().expect("Should load credentials");
    assert_eq!(loaded, Some(Credentials::new("admin", "secret")));
}

#[test]
fn test_save_replaces_previous_pair() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileCredentialStore::with_path(temp_dir.path().join("qa_admin_auth.json"));

    store.save(&Credentials::new("first", "one")).unwrap();
    store.save(&Credentials::new("second", "two")).unwrap();

    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded.username(), "second");
    assert_eq!(loaded.password(), "two");
}

#[test]
fn test_clear_removes_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("qa_admin_auth.json");
    let store = FileCredentialStore::with_path(path.clone());

    store.save(&Credentials::new("admin", "secret")).unwrap();
    assert!(path.exists());

    store.clear().expect("Should clear credentials");
    assert!(!path.exists());
    assert!(store.load().unwrap().is_none());

    // Clearing again is fine (logout from any state)
    store.clear().expect("Clearing an empty store should succeed");
}

#[test]
fn test_store_creates_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("qadmin").join("qa_admin_auth.json");
    let store = FileCredentialStore::with_path(path.clone());

    store.save(&Credentials::new("admin", "secret")).unwrap();
    assert!(path.exists());
}
