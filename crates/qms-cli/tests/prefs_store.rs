//! Preferences persistence on a real filesystem.

use qms_cli::prefs::{Locale, Preferences, PreferencesStore, PrefsError};

#[test]
fn missing_file_opens_with_defaults_and_is_not_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    let store = PreferencesStore::open(&path).unwrap();
    assert_eq!(store.get(), &Preferences::default());
    assert!(!path.exists());
}

#[test]
fn update_writes_through_and_reopens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("prefs.json");

    let mut store = PreferencesStore::open(&path).unwrap();
    store
        .update(|p| {
            p.locale = Locale::En;
            p.role = "quality_manager".to_string();
        })
        .unwrap();
    assert!(path.exists());

    let reopened = PreferencesStore::open(&path).unwrap();
    assert_eq!(reopened.get().locale, Locale::En);
    assert_eq!(reopened.get().role, "quality_manager");
    assert_eq!(reopened.get().market, "eu");
}

#[test]
fn corrupt_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = PreferencesStore::open(&path).unwrap_err();
    assert!(matches!(err, PrefsError::Parse { .. }));
    assert!(err.to_string().contains("prefs.json"));
}

#[test]
fn failed_write_keeps_previous_values() {
    let dir = tempfile::tempdir().unwrap();
    let parent = dir.path().join("settings");
    let mut store = PreferencesStore::open(parent.join("prefs.json")).unwrap();

    // A plain file where the parent directory should be.
    std::fs::write(&parent, "").unwrap();

    let err = store.update(|p| p.market = "us".to_string()).unwrap_err();
    assert!(matches!(err, PrefsError::Io { .. }));
    assert_eq!(store.get().market, "eu");
}
