use adminboard::storage::{MemoryPreferenceStore, PreferenceStore, SqlitePreferenceStore};
use adminboard::theme::ThemePreference;
use std::path::PathBuf;

fn temp_db() -> PathBuf {
    std::env::temp_dir()
        .join(format!("adminboard-prefs-{}", uuid::Uuid::new_v4()))
        .join("preferences.db")
}

#[tokio::test]
async fn test_empty_store_has_no_preference() {
    let store = SqlitePreferenceStore::in_memory().await.unwrap();
    assert_eq!(store.load_theme().await.unwrap(), None);
}

#[tokio::test]
async fn test_save_then_load() {
    let store = SqlitePreferenceStore::in_memory().await.unwrap();
    store.save_theme(ThemePreference::Dark).await.unwrap();
    assert_eq!(store.load_theme().await.unwrap(), Some(ThemePreference::Dark));
    assert_eq!(store.raw_theme().await.unwrap().as_deref(), Some("dark"));

    store.save_theme(ThemePreference::System).await.unwrap();
    assert_eq!(store.load_theme().await.unwrap(), Some(ThemePreference::System));
}

#[tokio::test]
async fn test_preference_survives_reopen() {
    let path = temp_db();

    {
        let store = SqlitePreferenceStore::open(&path).await.unwrap();
        store.save_theme(ThemePreference::Light).await.unwrap();
    }

    let reopened = SqlitePreferenceStore::open(&path).await.unwrap();
    assert_eq!(reopened.load_theme().await.unwrap(), Some(ThemePreference::Light));

    drop(reopened);
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[tokio::test]
async fn test_unparsable_value_is_ignored() {
    let store = SqlitePreferenceStore::in_memory().await.unwrap();
    store.write_raw_theme("solarized").await.unwrap();
    assert_eq!(store.load_theme().await.unwrap(), None);
    assert_eq!(store.raw_theme().await.unwrap().as_deref(), Some("solarized"));
}

#[tokio::test]
async fn test_memory_store() {
    let store = MemoryPreferenceStore::new();
    assert_eq!(store.load_theme().await.unwrap(), None);

    store.save_theme(ThemePreference::Dark).await.unwrap();
    assert_eq!(store.load_theme().await.unwrap(), Some(ThemePreference::Dark));

    let seeded = MemoryPreferenceStore::with_raw("bogus");
    assert_eq!(seeded.load_theme().await.unwrap(), None);
}
